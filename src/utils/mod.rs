//! Helpers shared by the service and the CLI.
//!
//! - [`code_generator`] - Deterministic short code derivation
//! - [`url_normalizer`] - Scheme defaulting and URL validation
//! - [`extract_domain`] - Destination domain extraction for metrics

pub mod code_generator;
pub mod extract_domain;
pub mod url_normalizer;
