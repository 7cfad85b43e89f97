//! Domain layer: entities and the storage contract.
//!
//! - [`entities`] - Plain data structures ([`entities::UrlMapping`], [`entities::DomainMetric`])
//! - [`repositories`] - The [`repositories::LinkStore`] trait implemented by infrastructure
//!
//! The domain layer has no dependency on HTTP or on any concrete backend.

pub mod entities;
pub mod repositories;
