//! In-memory task store for intake and feed tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::social::domain::UserId;
use crate::tasks::{
    domain::{Category, Task, TaskId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Per-owner task vectors preserve insertion order, matching the stream
/// order of the external store's sub-collections.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<HashMap<UserId, Vec<Task>>>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> TaskStoreError {
    TaskStoreError::backend(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn add_task(&self, owner: &UserId, task: &Task) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.entry(owner.clone()).or_default().push(task.clone());
        Ok(())
    }

    async fn list_tasks(&self, owner: &UserId) -> TaskStoreResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.get(owner).cloned().unwrap_or_default())
    }

    async fn set_status(&self, owner: &UserId, id: TaskId, done: bool) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let task = state
            .get_mut(owner)
            .and_then(|tasks| tasks.iter_mut().find(|task| task.id() == id))
            .ok_or(TaskStoreError::NotFound(id))?;
        task.set_done(done);
        Ok(())
    }

    async fn update_category(
        &self,
        owner: &UserId,
        id: TaskId,
        category: Category,
    ) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let task = state
            .get_mut(owner)
            .and_then(|tasks| tasks.iter_mut().find(|task| task.id() == id))
            .ok_or(TaskStoreError::NotFound(id))?;
        task.set_category(category);
        Ok(())
    }
}
