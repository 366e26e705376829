//! Store port for per-user task collections.

use crate::social::domain::UserId;
use crate::tasks::domain::{Category, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract against the external document store.
///
/// Tasks live in per-user sub-collections; every operation is scoped to an
/// owner.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Appends a task to the owner's collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Backend`] when the store call fails.
    async fn add_task(&self, owner: &UserId, task: &Task) -> TaskStoreResult<()>;

    /// Returns the owner's full task collection, unbounded.
    ///
    /// An owner with no record or no tasks yields an empty sequence, not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Backend`] when the store call fails.
    async fn list_tasks(&self, owner: &UserId) -> TaskStoreResult<Vec<Task>>;

    /// Sets the done/not-done status of one task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist in
    /// the owner's collection or [`TaskStoreError::Backend`] when the store
    /// call fails.
    async fn set_status(&self, owner: &UserId, id: TaskId, done: bool) -> TaskStoreResult<()>;

    /// Replaces the category label of one task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when the task does not exist in
    /// the owner's collection or [`TaskStoreError::Backend`] when the store
    /// call fails.
    async fn update_category(
        &self,
        owner: &UserId,
        id: TaskId,
        category: Category,
    ) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The task was not found in the owner's collection.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Store-layer failure.
    #[error("task store error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a store-layer error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
