//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::LinkStore`] trait and
//! expose a transport-agnostic API to HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Shortening, resolution, and domain metrics

pub mod services;
