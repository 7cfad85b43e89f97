//! Handler for the most popular destination domains.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::api::dto::top_domains::{TopDomainsRequest, TopDomainsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the destination domains with the most short links.
///
/// # Endpoint
///
/// `POST /metrics/top-domains`
///
/// # Request Body
///
/// ```json
/// { "limit": 3 }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "top_domains": [
///     { "domain": "udemy.com", "count": 6 },
///     { "domain": "youtube.com", "count": 4 }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed body and 500 if the store cannot
/// be aggregated.
pub async fn top_domains_handler(
    State(state): State<AppState>,
    payload: Result<Json<TopDomainsRequest>, JsonRejection>,
) -> Result<Json<TopDomainsResponse>, AppError> {
    let Json(payload) = payload?;
    let limit = payload.limit.unwrap_or(state.top_domains_default_limit);

    let metrics = state.shortener.top_domains(limit).await?;

    Ok(Json(TopDomainsResponse {
        top_domains: metrics.into_iter().map(Into::into).collect(),
    }))
}
