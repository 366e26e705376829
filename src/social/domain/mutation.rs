//! Single-field set mutations applied to user records.
//!
//! The external store guarantees atomicity per document field update only,
//! so the social graph is maintained through sequences of independent
//! single-field mutations. This module is the vocabulary for those updates.

use super::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Set-valued relation field on a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationField {
    /// Confirmed friendships, symmetric across both records.
    Friends,
    /// Pending requests this user has sent.
    RequestsSent,
    /// Pending requests this user has received.
    RequestsReceived,
}

impl RelationField {
    /// Returns the document field name used by the external store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Friends => "friends",
            Self::RequestsSent => "friend_requests_sent",
            Self::RequestsReceived => "friend_requests_received",
        }
    }
}

impl fmt::Display for RelationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Idempotent set operation on a relation field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "user_id", rename_all = "snake_case")]
pub enum SetOp {
    /// Adds the identifier to the set; a no-op when already present.
    Add(UserId),
    /// Removes the identifier from the set; a no-op when absent.
    Remove(UserId),
}

/// One set mutation on one relation field of one user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationMutation {
    field: RelationField,
    op: SetOp,
}

impl RelationMutation {
    /// Creates a set-add mutation.
    #[must_use]
    pub const fn add(field: RelationField, user_id: UserId) -> Self {
        Self {
            field,
            op: SetOp::Add(user_id),
        }
    }

    /// Creates a set-remove mutation.
    #[must_use]
    pub const fn remove(field: RelationField, user_id: UserId) -> Self {
        Self {
            field,
            op: SetOp::Remove(user_id),
        }
    }

    /// Returns the targeted relation field.
    #[must_use]
    pub const fn field(&self) -> RelationField {
        self.field
    }

    /// Returns the set operation.
    #[must_use]
    pub const fn op(&self) -> &SetOp {
        &self.op
    }
}
