//! Handler for short code redirects.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::warn;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /redirect/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code was never issued.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let original_url = state
        .shortener
        .resolve(&code)
        .await
        .inspect_err(|_| warn!(code = %code, "Short code not found"))?;

    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, original_url)],
    )
        .into_response())
}

/// Rejects `GET /redirect` without a code.
pub async fn missing_code_handler() -> AppError {
    AppError::bad_request("Short code is required", json!({}))
}
