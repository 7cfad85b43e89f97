//! Domain popularity metric.

/// Number of stored mappings pointing at one destination domain.
///
/// Derived on every query from the full mapping set; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainMetric {
    pub domain: String,
    pub count: u64,
}

impl DomainMetric {
    pub fn new(domain: impl Into<String>, count: u64) -> Self {
        Self {
            domain: domain.into(),
            count,
        }
    }
}
