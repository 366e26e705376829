//! Port contracts for task persistence and categorization.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod categorizer;
pub mod store;

pub use categorizer::{Categorizer, CategorizerError, CategorizerResult};
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
