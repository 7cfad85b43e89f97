//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod redirect;
pub mod shorten;
pub mod top_domains;

pub use health::health_handler;
pub use redirect::{missing_code_handler, redirect_handler};
pub use shorten::{shorten_batch_handler, shorten_handler};
pub use top_domains::top_domains_handler;
