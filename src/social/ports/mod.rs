//! Port contracts for the social graph.
//!
//! Ports define infrastructure-agnostic interfaces used by social services.

pub mod store;

pub use store::{UserStore, UserStoreError, UserStoreResult};
