//! Service layer for the aggregated friends' task feed.

use crate::social::{
    domain::UserId,
    ports::{UserStore, UserStoreError},
};
use crate::tasks::{domain::Task, ports::TaskStore};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// One friend's task in the aggregated feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FriendTask {
    friend_id: UserId,
    task: Task,
}

impl FriendTask {
    /// Creates a feed entry annotated with the contributing friend.
    #[must_use]
    pub const fn new(friend_id: UserId, task: Task) -> Self {
        Self { friend_id, task }
    }

    /// Returns the contributing friend's id.
    #[must_use]
    pub const fn friend_id(&self) -> &UserId {
        &self.friend_id
    }

    /// Returns the task.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }
}

/// Aggregated, privacy-filtered view of a user's friends' tasks.
///
/// Entry order follows the friends-set iteration order, then each friend's
/// task stream order; it is not a stable contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FriendTaskFeed {
    tasks: Vec<FriendTask>,
    skipped_friends: Vec<UserId>,
}

impl FriendTaskFeed {
    /// Returns the visible tasks, each annotated with its friend.
    #[must_use]
    pub fn tasks(&self) -> &[FriendTask] {
        &self.tasks
    }

    /// Returns the friends whose task fetch failed and was skipped.
    #[must_use]
    pub fn skipped_friends(&self) -> &[UserId] {
        &self.skipped_friends
    }
}

/// Service-level errors for the friends' task feed.
#[derive(Debug, Error)]
pub enum FriendFeedError {
    /// The requesting user's record does not exist.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// User store operation failed.
    #[error(transparent)]
    Store(UserStoreError),
}

/// Result type for friend feed operations.
pub type FriendFeedResult<T> = Result<T, FriendFeedError>;

/// Friends' task feed aggregation service.
#[derive(Clone)]
pub struct FriendFeedService<U, T>
where
    U: UserStore,
    T: TaskStore,
{
    users: Arc<U>,
    tasks: Arc<T>,
}

impl<U, T> FriendFeedService<U, T>
where
    U: UserStore,
    T: TaskStore,
{
    /// Creates a new friend feed service.
    #[must_use]
    pub const fn new(users: Arc<U>, tasks: Arc<T>) -> Self {
        Self { users, tasks }
    }

    /// Aggregates the privacy-filtered tasks of the user's friends.
    ///
    /// An empty friends set yields an empty feed. A friend whose record or
    /// task collection no longer exists contributes zero tasks. A store
    /// failure for one friend skips that friend and continues; skipped
    /// friends are reported in the feed rather than aborting the
    /// aggregation. Tasks flagged private never appear.
    ///
    /// # Errors
    ///
    /// Returns [`FriendFeedError::NotFound`] when the requesting user does
    /// not exist and [`FriendFeedError::Store`] when the user lookup
    /// itself fails.
    pub async fn friends_tasks(&self, user_id: &UserId) -> FriendFeedResult<FriendTaskFeed> {
        let user = self
            .users
            .get_user(user_id)
            .await
            .map_err(lift)?
            .ok_or_else(|| FriendFeedError::NotFound(user_id.clone()))?;

        let mut tasks = Vec::new();
        let mut skipped_friends = Vec::new();
        for friend_id in user.friends() {
            match self.tasks.list_tasks(friend_id).await {
                Ok(friend_tasks) => {
                    tasks.extend(
                        friend_tasks
                            .into_iter()
                            .filter(|task| !task.is_private())
                            .map(|task| FriendTask::new(friend_id.clone(), task)),
                    );
                }
                Err(_) => skipped_friends.push(friend_id.clone()),
            }
        }

        Ok(FriendTaskFeed {
            tasks,
            skipped_friends,
        })
    }
}

/// Lifts a user store error into the feed error space, keeping the
/// not-found kind distinct from backend failures.
fn lift(err: UserStoreError) -> FriendFeedError {
    match err {
        UserStoreError::NotFound(id) => FriendFeedError::NotFound(id),
        other => FriendFeedError::Store(other),
    }
}
