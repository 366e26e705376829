//! Task record owned by a single user.

use super::{Category, TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task record as held in a user's task collection.
///
/// The `is_private` flag defaults to `false` on deserialization: a task
/// with no flag is visible to friends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    category: Category,
    #[serde(default)]
    done: bool,
    #[serde(default)]
    is_private: bool,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task with the category assigned by the intake pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty
    /// after trimming.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        is_private: bool,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self {
            id: TaskId::new(),
            title,
            description: description.into(),
            category,
            done: false,
            is_private,
            created_at: clock.utc(),
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the category label.
    #[must_use]
    pub const fn category(&self) -> &Category {
        &self.category
    }

    /// Returns whether the task is done.
    #[must_use]
    pub const fn done(&self) -> bool {
        self.done
    }

    /// Returns whether the task is hidden from friends.
    #[must_use]
    pub const fn is_private(&self) -> bool {
        self.is_private
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Sets the done/not-done status.
    pub fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    /// Replaces the category label. Categories never change implicitly;
    /// this is the explicit-update path only.
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }
}
