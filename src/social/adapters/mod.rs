//! Adapter implementations for social ports.

pub mod memory;
