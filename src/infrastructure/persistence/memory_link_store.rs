//! In-memory implementation of the link store.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

/// Both directions of the mapping, always updated together.
#[derive(Debug, Default)]
struct Mappings {
    /// original URL -> short code
    url_to_code: HashMap<String, String>,
    /// short code -> original URL
    code_to_url: HashMap<String, String>,
}

/// Process-local store guarded by a single read/write lock.
///
/// Reads share the lock; a write holds it exclusively while touching both
/// maps, so no reader sees one direction updated without the other. State is
/// lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryLinkStore {
    inner: RwLock<Mappings>,
}

impl InMemoryLinkStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkStore for InMemoryLinkStore {
    async fn save(&self, original_url: &str, short_code: &str) -> Result<(), AppError> {
        let mut guard = self.inner.write();
        let mappings = &mut *guard;

        // Overwrites drop the stale reverse entries so the maps stay a bijection.
        if let Some(old_code) = mappings
            .url_to_code
            .insert(original_url.to_owned(), short_code.to_owned())
            && old_code != short_code
        {
            mappings.code_to_url.remove(&old_code);
        }

        if let Some(old_url) = mappings
            .code_to_url
            .insert(short_code.to_owned(), original_url.to_owned())
            && old_url != original_url
        {
            mappings.url_to_code.remove(&old_url);
        }

        Ok(())
    }

    async fn get(&self, short_code: &str) -> Result<Option<String>, AppError> {
        Ok(self.inner.read().code_to_url.get(short_code).cloned())
    }

    async fn exists(&self, original_url: &str) -> Result<Option<String>, AppError> {
        Ok(self.inner.read().url_to_code.get(original_url).cloned())
    }

    async fn all_mappings(&self) -> Result<Vec<UrlMapping>, AppError> {
        let guard = self.inner.read();

        Ok(guard
            .url_to_code
            .iter()
            .map(|(url, code)| UrlMapping::new(url.as_str(), code.as_str()))
            .collect())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.inner.read().url_to_code.len())
    }
}
