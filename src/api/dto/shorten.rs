//! DTOs for the single and batch shortening endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten one URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// URL to shorten; `http://` is assumed when no scheme is given.
    #[validate(length(max = 8192))]
    pub url: String,
}

/// Request to shorten several URLs in one call.
#[derive(Debug, Deserialize, Validate)]
pub struct BatchShortenRequest {
    #[validate(length(max = 1000))]
    pub urls: Vec<String>,
}

/// A shortened URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
    /// The normalized URL the code redirects to.
    pub url: String,
    pub short_url: String,
}

/// Batch results in input order, plus one line per failed URL.
#[derive(Debug, Serialize)]
pub struct BatchShortenResponse {
    pub results: Vec<ShortenResponse>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}
