//! API route configuration.
//!
//! Paths match the original public contract of the service, so existing
//! clients keep working.

use crate::api::handlers::{
    missing_code_handler, redirect_handler, shorten_batch_handler, shorten_handler,
    top_domains_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Shortening, redirect, and metrics routes.
///
/// # Endpoints
///
/// - `POST /shorten`              - Shorten one URL
/// - `POST /shortenMultipleURLs`  - Shorten a batch of URLs
/// - `GET  /redirect/{code}`      - 301 redirect to the original URL
/// - `POST /metrics/top-domains`  - Most frequent destination domains
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/shortenMultipleURLs", post(shorten_batch_handler))
        .route("/redirect", get(missing_code_handler))
        .route("/redirect/{code}", get(redirect_handler))
        .route("/metrics/top-domains", post(top_domains_handler))
}
