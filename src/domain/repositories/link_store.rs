//! Storage trait for the URL ↔ short code mapping.

use crate::domain::entities::UrlMapping;
use crate::error::AppError;
use async_trait::async_trait;

/// Bidirectional store between original URLs and short codes.
///
/// Implementations must keep the two directions consistent: a reader never
/// observes a code whose URL maps back to a different code. Every URL maps to
/// exactly one code and every code to exactly one URL.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkStore`] - process-local store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/store_memory.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Inserts or overwrites the mapping in both directions at once.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backend cannot persist the pair.
    /// The in-memory backend never fails.
    async fn save(&self, original_url: &str, short_code: &str) -> Result<(), AppError>;

    /// Looks up the original URL for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn get(&self, short_code: &str) -> Result<Option<String>, AppError>;

    /// Looks up the short code already issued for an original URL.
    ///
    /// Used to deduplicate shortening requests.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn exists(&self, original_url: &str) -> Result<Option<String>, AppError>;

    /// Returns a snapshot of every mapping, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn all_mappings(&self) -> Result<Vec<UrlMapping>, AppError>;

    /// Counts stored mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on backend errors.
    async fn count(&self) -> Result<usize, AppError>;
}
