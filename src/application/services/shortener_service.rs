//! Short link creation, resolution, and domain popularity.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{BatchOutcome, DomainMetric, UrlMapping};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::extract_domain::extract_domain;
use crate::utils::url_normalizer::{normalize_url, with_default_scheme};
use serde_json::json;
use tracing::{debug, info};

/// Service turning user-supplied URLs into short codes and back.
///
/// Holds no mutable state of its own; all mappings live in the injected
/// [`LinkStore`], so one instance can be shared across request handlers.
pub struct ShortenerService<S: LinkStore + ?Sized> {
    store: Arc<S>,
}

impl<S: LinkStore + ?Sized> ShortenerService<S> {
    /// Creates a new shortener service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Shortens a URL and returns its code.
    ///
    /// Repeated calls with the same effective URL return the same code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the URL cannot be parsed or lacks a
    /// scheme or host. Store failures surface as [`AppError::Internal`].
    pub async fn shorten(&self, url: &str) -> Result<String, AppError> {
        self.create_mapping(url)
            .await
            .map(|mapping| mapping.short_code)
    }

    /// Shortens a URL and returns the normalized URL together with its code.
    ///
    /// # Flow
    ///
    /// 1. Prefix `http://` if the input has no scheme separator
    /// 2. Validate that the result parses and has a scheme and host
    /// 3. Return the existing code if this URL was already shortened
    /// 4. Otherwise derive the code from the URL hash and store the pair
    ///
    /// The check and the write are not one critical section. Two racing calls
    /// for a new URL both write, but they write the same derived code.
    ///
    /// # Errors
    ///
    /// See [`Self::shorten`].
    pub async fn create_mapping(&self, url: &str) -> Result<UrlMapping, AppError> {
        let normalized_url = normalize_url(url)
            .map_err(|e| AppError::invalid_url(e.to_string(), json!({ "url": url })))?;

        if let Some(existing_code) = self.store.exists(&normalized_url).await? {
            debug!(code = %existing_code, url = %normalized_url, "URL already shortened");
            return Ok(UrlMapping::new(normalized_url, existing_code));
        }

        let code = generate_code(&normalized_url);
        self.store.save(&normalized_url, &code).await?;
        info!(code = %code, url = %normalized_url, "Created short link");

        Ok(UrlMapping::new(normalized_url, code))
    }

    /// Shortens several URLs, continuing past individual failures.
    ///
    /// Blank entries are skipped silently. Each failure is reported as
    /// `Error shortening URL <url>: <reason>` in [`BatchOutcome::errors`].
    pub async fn shorten_batch<I, U>(&self, urls: I) -> BatchOutcome
    where
        I: IntoIterator<Item = U>,
        U: AsRef<str>,
    {
        let mut outcome = BatchOutcome::default();

        for url in urls {
            let url = url.as_ref();
            if url.trim().is_empty() {
                continue;
            }

            match self.create_mapping(url).await {
                Ok(mapping) => outcome.results.push(mapping),
                Err(err) => outcome.errors.push(format!(
                    "Error shortening URL {}: {}",
                    with_default_scheme(url),
                    err
                )),
            }
        }

        outcome
    }

    /// Resolves a short code to its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code was never issued.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        self.store
            .get(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short code not found", json!({ "code": code })))
    }

    /// Returns the most frequent destination domains, most popular first.
    ///
    /// Counts are recomputed from every stored mapping on each call. Ties are
    /// ordered by domain name. URLs whose domain cannot be extracted are
    /// skipped. A `limit` of zero or less yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Aggregation`] if the store cannot list its mappings.
    pub async fn top_domains(&self, limit: i64) -> Result<Vec<DomainMetric>, AppError> {
        let mappings = self.store.all_mappings().await.map_err(|e| {
            AppError::aggregation(
                "Failed to aggregate domain metrics",
                json!({ "reason": e.to_string() }),
            )
        })?;

        let mut counts: HashMap<String, u64> = HashMap::new();
        for mapping in &mappings {
            if let Some(domain) = extract_domain(&mapping.original_url) {
                *counts.entry(domain).or_default() += 1;
            }
        }

        let mut metrics: Vec<DomainMetric> = counts
            .into_iter()
            .map(|(domain, count)| DomainMetric::new(domain, count))
            .collect();

        metrics.sort_unstable_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.domain.cmp(&b.domain))
        });

        let limit = if limit <= 0 {
            0
        } else {
            usize::try_from(limit).unwrap_or(usize::MAX)
        };
        metrics.truncate(limit);

        Ok(metrics)
    }

    /// Number of stored mappings, used by the health check.
    ///
    /// # Errors
    ///
    /// Propagates store errors.
    pub async fn mapping_count(&self) -> Result<usize, AppError> {
        self.store.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkStore;
    use crate::infrastructure::persistence::InMemoryLinkStore;

    fn memory_service() -> ShortenerService<InMemoryLinkStore> {
        ShortenerService::new(Arc::new(InMemoryLinkStore::new()))
    }

    #[tokio::test]
    async fn test_shorten_new_url_saves_mapping() {
        let mut mock_store = MockLinkStore::new();

        mock_store
            .expect_exists()
            .withf(|url| url == "https://example.com")
            .times(1)
            .returning(|_| Ok(None));

        mock_store
            .expect_save()
            .withf(|url, code| url == "https://example.com" && code == "yYTQaq-")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ShortenerService::new(Arc::new(mock_store));

        let code = service.shorten("https://example.com").await.unwrap();
        assert_eq!(code, "yYTQaq-");
    }

    #[tokio::test]
    async fn test_shorten_deduplication_skips_save() {
        let mut mock_store = MockLinkStore::new();

        mock_store
            .expect_exists()
            .times(1)
            .returning(|_| Ok(Some("existing".to_string())));

        mock_store.expect_save().times(0);

        let service = ShortenerService::new(Arc::new(mock_store));

        let code = service.shorten("https://example.com").await.unwrap();
        assert_eq!(code, "existing");
    }

    #[tokio::test]
    async fn test_shorten_adds_default_scheme() {
        let mut mock_store = MockLinkStore::new();

        mock_store
            .expect_exists()
            .withf(|url| url == "http://example.com")
            .times(1)
            .returning(|_| Ok(None));

        mock_store
            .expect_save()
            .withf(|url, code| url == "http://example.com" && code == "qbnwQzb")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ShortenerService::new(Arc::new(mock_store));

        let mapping = service.create_mapping("example.com").await.unwrap();
        assert_eq!(mapping, UrlMapping::new("http://example.com", "qbnwQzb"));
    }

    #[tokio::test]
    async fn test_shorten_invalid_urls_never_touch_store() {
        let mut mock_store = MockLinkStore::new();
        mock_store.expect_exists().times(0);
        mock_store.expect_save().times(0);

        let service = ShortenerService::new(Arc::new(mock_store));

        for url in ["", "http://", "not a url"] {
            let result = service.shorten(url).await;
            assert!(
                matches!(result, Err(AppError::InvalidUrl { .. })),
                "expected InvalidUrl for {url:?}"
            );
        }
    }

    #[tokio::test]
    async fn test_shorten_store_failure_propagates() {
        let mut mock_store = MockLinkStore::new();

        mock_store.expect_exists().returning(|_| Ok(None));
        mock_store
            .expect_save()
            .returning(|_, _| Err(AppError::internal("disk full", json!({}))));

        let service = ShortenerService::new(Arc::new(mock_store));

        let result = service.shorten("https://example.com").await;
        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut mock_store = MockLinkStore::new();

        mock_store
            .expect_get()
            .withf(|code| code == "missing")
            .times(1)
            .returning(|_| Ok(None));

        let service = ShortenerService::new(Arc::new(mock_store));

        let result = service.resolve("missing").await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_top_domains_store_failure_is_aggregation_error() {
        let mut mock_store = MockLinkStore::new();

        mock_store
            .expect_all_mappings()
            .times(1)
            .returning(|| Err(AppError::internal("backend down", json!({}))));

        let service = ShortenerService::new(Arc::new(mock_store));

        let result = service.top_domains(5).await;
        assert!(matches!(result, Err(AppError::Aggregation { .. })));
    }

    #[tokio::test]
    async fn test_top_domains_skips_unparseable_urls() {
        let mut mock_store = MockLinkStore::new();

        mock_store.expect_all_mappings().returning(|| {
            Ok(vec![
                UrlMapping::new("https://example.com/a", "a"),
                UrlMapping::new("::garbage::", "b"),
                UrlMapping::new("https://www.example.com/b", "c"),
            ])
        });

        let service = ShortenerService::new(Arc::new(mock_store));

        let metrics = service.top_domains(10).await.unwrap();
        assert_eq!(metrics, vec![DomainMetric::new("example.com", 2)]);
    }

    #[tokio::test]
    async fn test_round_trip_and_idempotence() {
        let service = memory_service();

        let first = service.shorten("example.com/page").await.unwrap();
        let second = service.shorten("example.com/page").await.unwrap();
        assert_eq!(first, second);

        let resolved = service.resolve(&first).await.unwrap();
        assert_eq!(resolved, "http://example.com/page");
    }

    #[tokio::test]
    async fn test_codes_independent_of_store_instance() {
        let one = memory_service();
        let two = memory_service();

        one.shorten("https://first.example").await.unwrap();

        let a = one.shorten("https://rust-lang.org").await.unwrap();
        let b = two.shorten("https://rust-lang.org").await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_top_domains_ranking() {
        let service = memory_service();

        let seeds = [
            ("udemy.com", 6),
            ("youtube.com", 4),
            ("wikipedia.org", 2),
            ("stackoverflow.com", 1),
        ];
        for (domain, n) in seeds {
            for i in 0..n {
                service
                    .shorten(&format!("https://www.{domain}/item/{i}"))
                    .await
                    .unwrap();
            }
        }

        let top = service.top_domains(3).await.unwrap();
        assert_eq!(
            top,
            vec![
                DomainMetric::new("udemy.com", 6),
                DomainMetric::new("youtube.com", 4),
                DomainMetric::new("wikipedia.org", 2),
            ]
        );
    }

    #[tokio::test]
    async fn test_top_domains_ties_sorted_by_name() {
        let service = memory_service();

        for url in ["https://b.com", "https://a.com", "https://c.com/x", "https://c.com/y"] {
            service.shorten(url).await.unwrap();
        }

        let top = service.top_domains(10).await.unwrap();
        assert_eq!(
            top,
            vec![
                DomainMetric::new("c.com", 2),
                DomainMetric::new("a.com", 1),
                DomainMetric::new("b.com", 1),
            ]
        );
    }

    #[tokio::test]
    async fn test_top_domains_non_positive_limit() {
        let service = memory_service();
        service.shorten("https://example.com").await.unwrap();

        assert!(service.top_domains(0).await.unwrap().is_empty());
        assert!(service.top_domains(-3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_shorten_batch_collects_errors() {
        let service = memory_service();

        let outcome = service
            .shorten_batch(["https://example.com", "   ", "not a url", "", "rust-lang.org"])
            .await;

        assert_eq!(outcome.results.len(), 2);
        assert_eq!(outcome.results[0].original_url, "https://example.com");
        assert_eq!(outcome.results[1].original_url, "http://rust-lang.org");

        assert_eq!(outcome.errors.len(), 1);
        assert!(
            outcome.errors[0].starts_with("Error shortening URL http://not a url:"),
            "unexpected error line: {}",
            outcome.errors[0]
        );
    }

    #[tokio::test]
    async fn test_concurrent_shorten_same_url() {
        let service = Arc::new(memory_service());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move { service.shorten("https://race.example").await })
            })
            .collect();

        let mut codes = Vec::new();
        for handle in handles {
            codes.push(handle.await.unwrap().unwrap());
        }

        assert!(codes.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(service.mapping_count().await.unwrap(), 1);
    }
}
