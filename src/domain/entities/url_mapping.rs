//! URL mapping entity linking an original URL to its short code.

/// One accepted shortening: the normalized original URL and the code issued for it.
///
/// Created once per distinct original URL and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlMapping {
    pub original_url: String,
    pub short_code: String,
}

impl UrlMapping {
    /// Creates a new mapping.
    pub fn new(original_url: impl Into<String>, short_code: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            short_code: short_code.into(),
        }
    }
}

/// Outcome of a best-effort batch shortening.
///
/// `results` keeps the input order of the URLs that succeeded. Each failure is
/// reported as a human-readable line in `errors` instead of aborting the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub results: Vec<UrlMapping>,
    pub errors: Vec<String>,
}
