//! Shared world state for friendship lifecycle BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use taskring::social::{
    adapters::memory::InMemoryUserStore,
    domain::UserId,
    services::{FriendshipError, FriendshipService},
};

/// Service type used by the BDD world.
pub type TestFriendshipService = FriendshipService<InMemoryUserStore>;

/// Scenario world for friendship behaviour tests.
pub struct FriendshipWorld {
    pub store: InMemoryUserStore,
    pub service: TestFriendshipService,
    pub last_send_result: Option<Result<UserId, FriendshipError>>,
    pub last_update_result: Option<Result<(), FriendshipError>>,
}

impl FriendshipWorld {
    /// Creates a world with an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let store = InMemoryUserStore::new();
        let service = FriendshipService::new(Arc::new(store.clone()));
        Self {
            store,
            service,
            last_send_result: None,
            last_update_result: None,
        }
    }
}

impl Default for FriendshipWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> FriendshipWorld {
    FriendshipWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
