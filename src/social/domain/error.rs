//! Error types for social domain validation.

use thiserror::Error;

/// Errors returned while constructing domain user values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SocialDomainError {
    /// The user identifier is empty after trimming.
    #[error("user identifier must not be empty")]
    EmptyUserId,

    /// The user identifier contains whitespace.
    #[error("invalid user identifier: {0}")]
    InvalidUserId(String),

    /// The email address does not follow `local@domain` format.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}
