//! Core domain entities of the shortener.
//!
//! - [`UrlMapping`] - An original URL and the short code issued for it
//! - [`BatchOutcome`] - Per-item results of a batch shortening
//! - [`DomainMetric`] - How many mappings point at a given domain

pub mod domain_metric;
pub mod url_mapping;

pub use domain_metric::DomainMetric;
pub use url_mapping::{BatchOutcome, UrlMapping};
