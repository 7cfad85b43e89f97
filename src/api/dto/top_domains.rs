//! DTOs for the top-domains metrics endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::DomainMetric;

/// Request body for `POST /metrics/top-domains`.
///
/// A missing `limit` falls back to the configured default; zero or a
/// negative value returns an empty list.
#[derive(Debug, Deserialize)]
pub struct TopDomainsRequest {
    #[serde(default)]
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct TopDomainsResponse {
    pub top_domains: Vec<DomainMetricItem>,
}

/// One domain and the number of stored links pointing at it.
#[derive(Debug, Serialize)]
pub struct DomainMetricItem {
    pub domain: String,
    pub count: u64,
}

impl From<DomainMetric> for DomainMetricItem {
    fn from(metric: DomainMetric) -> Self {
        Self {
            domain: metric.domain,
            count: metric.count,
        }
    }
}
