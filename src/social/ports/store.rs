//! Store port for user record lookup and relation mutation.

use crate::social::domain::{EmailAddress, RelationMutation, User, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user store operations.
pub type UserStoreResult<T> = Result<T, UserStoreError>;

/// User record persistence contract against the external document store.
///
/// Each mutation call covers one field of one record. There is no
/// multi-record transaction: callers sequencing mutations across two
/// records must surface partial completion themselves.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetches a user record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`UserStoreError::Backend`] when the store call fails.
    async fn get_user(&self, id: &UserId) -> UserStoreResult<Option<User>>;

    /// Returns all user records matching the email address.
    ///
    /// Uniqueness is not enforced by the store; the caller decides how to
    /// treat zero or multiple matches.
    ///
    /// # Errors
    ///
    /// Returns [`UserStoreError::Backend`] when the store call fails.
    async fn find_users_by_email(&self, email: &EmailAddress) -> UserStoreResult<Vec<User>>;

    /// Applies one set mutation to one relation field of one user record.
    ///
    /// # Errors
    ///
    /// Returns [`UserStoreError::NotFound`] when the record does not exist
    /// or [`UserStoreError::Backend`] when the store call fails.
    async fn apply_mutation(&self, id: &UserId, mutation: RelationMutation)
    -> UserStoreResult<()>;
}

/// Errors returned by user store implementations.
#[derive(Debug, Clone, Error)]
pub enum UserStoreError {
    /// The user record was not found.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// Store-layer failure.
    #[error("user store error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserStoreError {
    /// Wraps a store-layer error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
