//! User record and relationship queries.

use super::{EmailAddress, RelationField, RelationMutation, SetOp, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Relationship between two users, derived from one side's record.
///
/// A correctly maintained pair of records is in exactly one of these
/// states; pending and friends never hold simultaneously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    /// No friendship and no pending request in either direction.
    Unrelated,
    /// This user has a pending request to the other user.
    OutgoingRequest,
    /// The other user has a pending request to this user.
    IncomingRequest,
    /// The users are confirmed friends.
    Friends,
}

/// User record as held by the external store.
///
/// The three relation sets default to empty on deserialization; an absent
/// field means "no relations", never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: EmailAddress,
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    friends: BTreeSet<UserId>,
    #[serde(default)]
    friend_requests_sent: BTreeSet<UserId>,
    #[serde(default)]
    friend_requests_received: BTreeSet<UserId>,
}

impl User {
    /// Creates a user record with empty relation sets.
    #[must_use]
    pub fn new(id: UserId, email: EmailAddress, display_name: impl Into<String>) -> Self {
        Self {
            id,
            email,
            display_name: display_name.into(),
            friends: BTreeSet::new(),
            friend_requests_sent: BTreeSet::new(),
            friend_requests_received: BTreeSet::new(),
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the user's email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the confirmed friend set.
    #[must_use]
    pub const fn friends(&self) -> &BTreeSet<UserId> {
        &self.friends
    }

    /// Returns the pending requests this user has sent.
    #[must_use]
    pub const fn friend_requests_sent(&self) -> &BTreeSet<UserId> {
        &self.friend_requests_sent
    }

    /// Returns the pending requests this user has received.
    #[must_use]
    pub const fn friend_requests_received(&self) -> &BTreeSet<UserId> {
        &self.friend_requests_received
    }

    /// Applies one set mutation to the targeted relation field.
    ///
    /// Set semantics make this idempotent: adding a present id or removing
    /// an absent id leaves the record unchanged.
    pub fn apply(&mut self, mutation: RelationMutation) {
        let set = match mutation.field() {
            RelationField::Friends => &mut self.friends,
            RelationField::RequestsSent => &mut self.friend_requests_sent,
            RelationField::RequestsReceived => &mut self.friend_requests_received,
        };
        match mutation.op() {
            SetOp::Add(user_id) => {
                set.insert(user_id.clone());
            }
            SetOp::Remove(user_id) => {
                set.remove(user_id);
            }
        }
    }

    /// Derives the relationship with another user from this record.
    ///
    /// Friendship takes precedence when the record is in an inconsistent
    /// intermediate state (friends and pending simultaneously).
    #[must_use]
    pub fn relationship_with(&self, other: &UserId) -> Relationship {
        if self.friends.contains(other) {
            Relationship::Friends
        } else if self.friend_requests_sent.contains(other) {
            Relationship::OutgoingRequest
        } else if self.friend_requests_received.contains(other) {
            Relationship::IncomingRequest
        } else {
            Relationship::Unrelated
        }
    }
}
