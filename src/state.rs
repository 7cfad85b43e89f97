//! Shared state injected into every HTTP handler.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::domain::repositories::LinkStore;

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService<dyn LinkStore>>,
    /// Public base URL used to build `short_url` values in responses.
    pub base_url: String,
    /// Limit applied by the top-domains endpoint when the request omits one.
    pub top_domains_default_limit: i64,
}

impl AppState {
    /// Builds the state around a store constructed once at startup.
    pub fn new(
        store: Arc<dyn LinkStore>,
        base_url: impl Into<String>,
        top_domains_default_limit: i64,
    ) -> Self {
        Self {
            shortener: Arc::new(ShortenerService::new(store)),
            base_url: base_url.into(),
            top_domains_default_limit,
        }
    }

    /// Full public URL that redirects to the original for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/redirect/{}", self.base_url.trim_end_matches('/'), code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::InMemoryLinkStore;

    #[test]
    fn test_short_url_trims_trailing_slash() {
        let state = AppState::new(Arc::new(InMemoryLinkStore::new()), "https://s.example.com/", 10);
        assert_eq!(state.short_url("abc1234"), "https://s.example.com/redirect/abc1234");
    }
}
