//! Service layer for task creation and owner-side updates.

use crate::social::domain::UserId;
use crate::tasks::{
    domain::{Category, Task, TaskDomainError, TaskId},
    ports::{Categorizer, CategorizerError, TaskStore, TaskStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task through the categorization pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    owner: UserId,
    title: String,
    description: String,
    is_private: bool,
}

impl CreateTaskRequest {
    /// Creates a request for a friend-visible task.
    #[must_use]
    pub fn new(owner: UserId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            owner,
            title: title.into(),
            description: description.into(),
            is_private: false,
        }
    }

    /// Marks the task as hidden from friends.
    #[must_use]
    pub fn private(mut self) -> Self {
        self.is_private = true;
        self
    }
}

/// Service-level errors for task intake operations.
#[derive(Debug, Error)]
pub enum TaskIntakeError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
    /// Categorization failed; no fallback category is substituted.
    #[error(transparent)]
    Categorizer(#[from] CategorizerError),
}

/// Result type for task intake service operations.
pub type TaskIntakeResult<T> = Result<T, TaskIntakeError>;

/// Task intake orchestration service.
#[derive(Clone)]
pub struct TaskIntakeService<S, C, K>
where
    S: TaskStore,
    C: Categorizer,
    K: Clock + Send + Sync,
{
    store: Arc<S>,
    categorizer: Arc<C>,
    clock: Arc<K>,
}

impl<S, C, K> TaskIntakeService<S, C, K>
where
    S: TaskStore,
    C: Categorizer,
    K: Clock + Send + Sync,
{
    /// Creates a new task intake service.
    #[must_use]
    pub const fn new(store: Arc<S>, categorizer: Arc<C>, clock: Arc<K>) -> Self {
        Self {
            store,
            categorizer,
            clock,
        }
    }

    /// Creates a task: the description is labelled by the categorizer,
    /// the record is persisted, and the stored task is returned.
    ///
    /// # Errors
    ///
    /// Returns [`TaskIntakeError::Categorizer`] when labelling fails (the
    /// error propagates unchanged), [`TaskIntakeError::Domain`] when the
    /// title is invalid, and [`TaskIntakeError::Store`] when persistence
    /// fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskIntakeResult<Task> {
        let category = self.categorizer.categorize(&request.description).await?;
        let task = Task::new(
            request.title,
            request.description,
            category,
            request.is_private,
            &*self.clock,
        )?;
        self.store.add_task(&request.owner, &task).await?;
        Ok(task)
    }

    /// Returns the owner's full task collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskIntakeError::Store`] when the store call fails.
    pub async fn tasks_for_user(&self, owner: &UserId) -> TaskIntakeResult<Vec<Task>> {
        Ok(self.store.list_tasks(owner).await?)
    }

    /// Sets the done/not-done status of one of the owner's tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskIntakeError::Store`] when the task does not exist or
    /// the store call fails.
    pub async fn set_status(
        &self,
        owner: &UserId,
        id: TaskId,
        done: bool,
    ) -> TaskIntakeResult<()> {
        Ok(self.store.set_status(owner, id, done).await?)
    }

    /// Re-runs the categorizer over a stored task's description and
    /// persists the new label. This is the only path that changes a
    /// category after creation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskIntakeError::Store`] when the task does not exist and
    /// [`TaskIntakeError::Categorizer`] when labelling fails.
    pub async fn recategorize(&self, owner: &UserId, id: TaskId) -> TaskIntakeResult<Category> {
        let tasks = self.store.list_tasks(owner).await?;
        let task = tasks
            .iter()
            .find(|task| task.id() == id)
            .ok_or(TaskStoreError::NotFound(id))?;
        let category = self.categorizer.categorize(task.description()).await?;
        self.store
            .update_category(owner, id, category.clone())
            .await?;
        Ok(category)
    }
}
