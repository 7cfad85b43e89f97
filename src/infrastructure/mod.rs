//! Infrastructure layer implementing the domain storage contract.
//!
//! - [`persistence`] - [`crate::domain::repositories::LinkStore`] backends

pub mod persistence;
