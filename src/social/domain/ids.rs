//! Identifier and validated scalar types for the social domain.

use super::SocialDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a user record.
///
/// Identifiers are assigned by the external store or identity provider and
/// are treated as opaque non-empty strings, not UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a validated user identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SocialDomainError::EmptyUserId`] when the value is empty
    /// after trimming, or [`SocialDomainError::InvalidUserId`] when it
    /// contains interior whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, SocialDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(SocialDomainError::EmptyUserId);
        }
        if normalized.chars().any(char::is_whitespace) {
            return Err(SocialDomainError::InvalidUserId(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated email address used to look up user records.
///
/// Addresses are normalized to ASCII lowercase so that lookups compare
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated, lowercased email address.
    ///
    /// # Errors
    ///
    /// Returns [`SocialDomainError::InvalidEmail`] when the value does not
    /// contain exactly one `@` with non-empty local and domain parts, or
    /// contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, SocialDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();
        let mut segments = normalized.split('@');
        let local = segments.next().unwrap_or_default();
        let domain = segments.next().unwrap_or_default();
        let has_more_segments = segments.next().is_some();
        let is_valid = !local.is_empty()
            && !domain.is_empty()
            && !has_more_segments
            && !normalized.chars().any(char::is_whitespace);

        if !is_valid {
            return Err(SocialDomainError::InvalidEmail(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the email address as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
