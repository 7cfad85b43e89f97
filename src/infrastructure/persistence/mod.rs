//! Link store backends.
//!
//! Only the in-memory backend ships; anything implementing
//! [`crate::domain::repositories::LinkStore`] can replace it.

mod memory_link_store;

pub use memory_link_store::InMemoryLinkStore;
