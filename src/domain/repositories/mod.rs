//! Storage trait definitions for the domain layer.
//!
//! The service depends only on [`LinkStore`]; concrete backends live in
//! `crate::infrastructure::persistence` and are injected at startup.
//!
//! # Testing
//!
//! See `tests/store_memory.rs` for backend behavior and the `cfg(test)`
//! [`MockLinkStore`] for service-level tests.

pub mod link_store;

pub use link_store::LinkStore;

#[cfg(test)]
pub use link_store::MockLinkStore;
