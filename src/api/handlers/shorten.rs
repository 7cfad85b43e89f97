//! Handlers for the shortening endpoints.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::json;
use tracing::warn;
use validator::Validate;

use crate::api::dto::shorten::{
    BatchShortenRequest, BatchShortenResponse, ShortenRequest, ShortenResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short code for one URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "example.com/page" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_code": "Xb3k9_q",
///   "url": "http://example.com/page",
///   "short_url": "http://localhost:8080/redirect/Xb3k9_q"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed, the URL is blank, or the
/// URL is invalid.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    if payload.url.trim().is_empty() {
        return Err(AppError::bad_request("URL cannot be empty", json!({})));
    }

    let mapping = state
        .shortener
        .create_mapping(&payload.url)
        .await
        .inspect_err(|e| warn!(url = %payload.url, error = %e, "Error shortening URL"))?;

    Ok(Json(ShortenResponse {
        short_url: state.short_url(&mapping.short_code),
        short_code: mapping.short_code,
        url: mapping.original_url,
    }))
}

/// Shortens a list of URLs, reporting failures per item.
///
/// # Endpoint
///
/// `POST /shortenMultipleURLs`
///
/// # Batch Processing
///
/// Blank entries are skipped. A failing URL does not stop the batch; its
/// reason is added to `errors` and the remaining URLs are still processed.
///
/// # Request Body
///
/// ```json
/// { "urls": ["https://example.com", "not a url"] }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "results": [
///     { "short_code": "yYTQaq-", "url": "https://example.com", "short_url": "..." }
///   ],
///   "errors": ["Error shortening URL http://not a url: Invalid URL format: ..."]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed or holds more than 1000 URLs.
pub async fn shorten_batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchShortenRequest>, JsonRejection>,
) -> Result<Json<BatchShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let outcome = state.shortener.shorten_batch(&payload.urls).await;

    let results = outcome
        .results
        .into_iter()
        .map(|mapping| ShortenResponse {
            short_url: state.short_url(&mapping.short_code),
            short_code: mapping.short_code,
            url: mapping.original_url,
        })
        .collect();

    Ok(Json(BatchShortenResponse {
        results,
        errors: outcome.errors,
    }))
}
