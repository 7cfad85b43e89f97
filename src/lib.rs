//! # tinylink
//!
//! An in-memory URL shortener built with Axum.
//!
//! Short codes are derived from an MD5 hash of the normalized URL, so the same
//! URL always gets the same code. Codes resolve through a 301 redirect, and the
//! service reports which destination domains are shortened most often.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and the [`domain::repositories::LinkStore`] trait
//! - **Application Layer** ([`application`]) - [`application::services::ShortenerService`]
//! - **Infrastructure Layer** ([`infrastructure`]) - The in-memory store backend
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! curl -X POST localhost:8080/shorten -H 'content-type: application/json' -d '{"url":"example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! State lives only in memory and is lost on restart.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenerService;
    pub use crate::domain::entities::{BatchOutcome, DomainMetric, UrlMapping};
    pub use crate::domain::repositories::LinkStore;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryLinkStore;
    pub use crate::state::AppState;
}
