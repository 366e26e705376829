//! Task intake and the friends' task feed for Taskring.
//!
//! This module covers the task side of the system: creating tasks through
//! the external categorization pipeline, owner-side status and category
//! updates, and aggregating the privacy-filtered view of a user's friends'
//! tasks. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
