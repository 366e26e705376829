//! In-memory adapters for social ports.

mod store;

pub use store::InMemoryUserStore;
