//! In-memory user store for social graph tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::social::{
    domain::{EmailAddress, RelationMutation, User, UserId},
    ports::{UserStore, UserStoreError, UserStoreResult},
};

/// Thread-safe in-memory user store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    state: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a user record, replacing any record with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`UserStoreError::Backend`] when the store lock is poisoned.
    pub fn insert_user(&self, user: User) -> UserStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| UserStoreError::backend(std::io::Error::other(err.to_string())))?;
        state.insert(user.id().clone(), user);
        Ok(())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get_user(&self, id: &UserId) -> UserStoreResult<Option<User>> {
        let state = self
            .state
            .read()
            .map_err(|err| UserStoreError::backend(std::io::Error::other(err.to_string())))?;
        Ok(state.get(id).cloned())
    }

    async fn find_users_by_email(&self, email: &EmailAddress) -> UserStoreResult<Vec<User>> {
        let state = self
            .state
            .read()
            .map_err(|err| UserStoreError::backend(std::io::Error::other(err.to_string())))?;
        let mut matches: Vec<User> = state
            .values()
            .filter(|user| user.email() == email)
            .cloned()
            .collect();
        // HashMap iteration order is arbitrary; sort for deterministic results.
        matches.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(matches)
    }

    async fn apply_mutation(
        &self,
        id: &UserId,
        mutation: RelationMutation,
    ) -> UserStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| UserStoreError::backend(std::io::Error::other(err.to_string())))?;
        let user = state
            .get_mut(id)
            .ok_or_else(|| UserStoreError::NotFound(id.clone()))?;
        user.apply(mutation);
        Ok(())
    }
}
