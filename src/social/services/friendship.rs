//! Service layer for friend request and friendship management.
//!
//! Each operation sequences independent single-field mutations across two
//! user records. The external store offers no multi-record transaction, so
//! a failure mid-sequence leaves earlier mutations in place; the store
//! error is surfaced to the caller without automatic rollback.

use crate::social::{
    domain::{EmailAddress, RelationField, RelationMutation, UserId},
    ports::{UserStore, UserStoreError},
};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Reference to a friend-request receiver: a direct id or a lookup email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiverRef {
    /// Direct user identifier.
    Id(UserId),
    /// Email address resolved against the store.
    Email(EmailAddress),
}

impl fmt::Display for ReceiverRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Email(email) => write!(f, "{email}"),
        }
    }
}

/// Service-level errors for friendship operations.
#[derive(Debug, Error)]
pub enum FriendshipError {
    /// The referenced user record does not exist.
    #[error("user not found: {0}")]
    NotFound(ReceiverRef),

    /// The email address matched more than one user record.
    #[error("email {email} matches {matches} user records")]
    AmbiguousEmail {
        /// The ambiguous lookup address.
        email: EmailAddress,
        /// Number of matching records.
        matches: usize,
    },

    /// A user attempted to befriend themselves.
    #[error("cannot send a friend request to yourself: {0}")]
    SelfReference(UserId),

    /// Store operation failed.
    #[error(transparent)]
    Store(UserStoreError),
}

/// Result type for friendship service operations.
pub type FriendshipResult<T> = Result<T, FriendshipError>;

/// Friend request and friendship orchestration service.
#[derive(Clone)]
pub struct FriendshipService<S>
where
    S: UserStore,
{
    store: Arc<S>,
}

impl<S> FriendshipService<S>
where
    S: UserStore,
{
    /// Creates a new friendship service.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Sends a friend request from `sender` to the resolved receiver.
    ///
    /// Records the pending request symmetrically: the receiver id is added
    /// to the sender's sent set, then the sender id to the receiver's
    /// received set. Both mutations are idempotent, so repeating the call
    /// yields the same pending state. Returns the resolved receiver id.
    ///
    /// # Errors
    ///
    /// Returns [`FriendshipError::NotFound`] when the receiver (or, via the
    /// mutation, the sender) does not exist, [`FriendshipError::AmbiguousEmail`]
    /// when the email matches several records, [`FriendshipError::SelfReference`]
    /// when sender and receiver coincide, and [`FriendshipError::Store`] on
    /// store failure. A store failure after the first mutation leaves the
    /// sender's record updated; no rollback is attempted.
    pub async fn send_request(
        &self,
        sender: &UserId,
        receiver: &ReceiverRef,
    ) -> FriendshipResult<UserId> {
        let receiver_id = self.resolve_receiver(receiver).await?;
        if receiver_id == *sender {
            return Err(FriendshipError::SelfReference(receiver_id));
        }

        self.store
            .apply_mutation(
                sender,
                RelationMutation::add(RelationField::RequestsSent, receiver_id.clone()),
            )
            .await
            .map_err(lift)?;
        self.store
            .apply_mutation(
                &receiver_id,
                RelationMutation::add(RelationField::RequestsReceived, sender.clone()),
            )
            .await
            .map_err(lift)?;

        Ok(receiver_id)
    }

    /// Accepts a pending friend request from `friend` on behalf of `user`.
    ///
    /// Performs four independent mutations: each id joins the other's
    /// friend set, then the pending entries are cleared from the receiver's
    /// received set and the sender's sent set. Set operations are
    /// idempotent and commutative, so the end state does not depend on
    /// ordering; a failure mid-sequence leaves an inconsistent intermediate
    /// state (for example a one-sided friendship) which is surfaced as the
    /// store error rather than hidden.
    ///
    /// # Errors
    ///
    /// Returns [`FriendshipError::NotFound`] when either record does not
    /// exist and [`FriendshipError::Store`] on store failure.
    pub async fn accept_request(&self, user: &UserId, friend: &UserId) -> FriendshipResult<()> {
        self.require_user(user).await?;
        self.require_user(friend).await?;

        let mutations = [
            (
                user.clone(),
                RelationMutation::add(RelationField::Friends, friend.clone()),
            ),
            (
                friend.clone(),
                RelationMutation::add(RelationField::Friends, user.clone()),
            ),
            (
                user.clone(),
                RelationMutation::remove(RelationField::RequestsReceived, friend.clone()),
            ),
            (
                friend.clone(),
                RelationMutation::remove(RelationField::RequestsSent, user.clone()),
            ),
        ];
        for (target, mutation) in mutations {
            self.store
                .apply_mutation(&target, mutation)
                .await
                .map_err(lift)?;
        }
        Ok(())
    }

    /// Declines a pending friend request from `friend` on behalf of `user`.
    ///
    /// Clears the pending entries from both sides' request sets and never
    /// touches the friend sets.
    ///
    /// # Errors
    ///
    /// Returns [`FriendshipError::NotFound`] when either record does not
    /// exist and [`FriendshipError::Store`] on store failure.
    pub async fn decline_request(&self, user: &UserId, friend: &UserId) -> FriendshipResult<()> {
        self.require_user(user).await?;
        self.require_user(friend).await?;

        self.store
            .apply_mutation(
                user,
                RelationMutation::remove(RelationField::RequestsReceived, friend.clone()),
            )
            .await
            .map_err(lift)?;
        self.store
            .apply_mutation(
                friend,
                RelationMutation::remove(RelationField::RequestsSent, user.clone()),
            )
            .await
            .map_err(lift)?;
        Ok(())
    }

    /// Resolves a receiver reference to a concrete user id.
    ///
    /// A non-unique email match is rejected rather than silently picking
    /// an arbitrary record.
    async fn resolve_receiver(&self, receiver: &ReceiverRef) -> FriendshipResult<UserId> {
        match receiver {
            ReceiverRef::Id(id) => {
                let user = self
                    .store
                    .get_user(id)
                    .await
                    .map_err(lift)?
                    .ok_or_else(|| FriendshipError::NotFound(receiver.clone()))?;
                Ok(user.id().clone())
            }
            ReceiverRef::Email(email) => {
                let matches = self.store.find_users_by_email(email).await.map_err(lift)?;
                let count = matches.len();
                let mut candidates = matches.into_iter();
                match (candidates.next(), candidates.next()) {
                    (None, _) => Err(FriendshipError::NotFound(receiver.clone())),
                    (Some(user), None) => Ok(user.id().clone()),
                    (Some(_), Some(_)) => Err(FriendshipError::AmbiguousEmail {
                        email: email.clone(),
                        matches: count,
                    }),
                }
            }
        }
    }

    /// Requires a user record to exist.
    async fn require_user(&self, id: &UserId) -> FriendshipResult<()> {
        self.store
            .get_user(id)
            .await
            .map_err(lift)?
            .map(|_| ())
            .ok_or_else(|| FriendshipError::NotFound(ReceiverRef::Id(id.clone())))
    }
}

/// Lifts a store error into the service error space, keeping the
/// not-found kind distinct from backend failures.
fn lift(err: UserStoreError) -> FriendshipError {
    match err {
        UserStoreError::NotFound(id) => FriendshipError::NotFound(ReceiverRef::Id(id)),
        other => FriendshipError::Store(other),
    }
}
