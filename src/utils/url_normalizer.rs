//! URL normalization and validation.
//!
//! Normalization is minimal: inputs without a `://` separator
//! get an `http://` prefix and nothing else changes. The normalized string is
//! what gets hashed and stored, so `resolve(shorten(u))` returns it verbatim.

use url::Url;

/// Scheme added to inputs that do not carry one.
pub const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL must have scheme and host")]
    MissingHost,
}

/// Prefixes `http://` when the input has no scheme separator.
///
/// # Examples
///
/// ```
/// use tinylink::utils::url_normalizer::with_default_scheme;
///
/// assert_eq!(with_default_scheme("example.com"), "http://example.com");
/// assert_eq!(with_default_scheme("https://example.com"), "https://example.com");
/// ```
pub fn with_default_scheme(input: &str) -> String {
    if input.contains("://") {
        input.to_owned()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{input}")
    }
}

/// Normalizes and validates a user-supplied URL.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] when the URL cannot be
/// parsed, and [`UrlNormalizationError::MissingHost`] when it parses but has
/// an empty scheme or host.
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let normalized = with_default_scheme(input);

    let parsed =
        Url::parse(&normalized).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    let has_host = parsed.host_str().is_some_and(|host| !host.is_empty());
    if parsed.scheme().is_empty() || !has_host {
        return Err(UrlNormalizationError::MissingHost);
    }

    Ok(normalized)
}
