//! Social graph management for Taskring.
//!
//! This module keeps the bidirectional friend/request relation consistent
//! under send/accept/decline operations. Relationships are modelled as
//! set-valued fields on each party's user record rather than a separate
//! edge collection, matching the document model of the external store; the
//! service layer issues one field mutation per store call and surfaces
//! partial completion to the caller instead of hiding it. The module
//! follows hexagonal architecture:
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
