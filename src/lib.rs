//! Taskring: backend core for a social to-do application.
//!
//! This crate provides the domain logic that sits between an HTTP API layer
//! and a hosted document store: maintaining the friend/request social graph
//! as mutual-state updates on pairs of user records, aggregating a
//! privacy-filtered view of friends' tasks, and running the task intake
//! pipeline that labels new tasks through an external categorization
//! service.
//!
//! # Architecture
//!
//! Taskring follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external collaborators (the
//!   document store and the categorization service)
//! - **Adapters**: Concrete implementations of ports (in-memory doubles, a
//!   deterministic keyword categorizer)
//!
//! # Modules
//!
//! - [`social`]: User records, friend requests, and friendship management
//! - [`tasks`]: Task intake, categorization, and the friends' task feed

pub mod social;
pub mod tasks;
