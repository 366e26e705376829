//! Categorizer label assigned to tasks.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized category label produced by the external categorizer.
///
/// The hosted model is prompted to answer with labels such as `urgent`,
/// `personal`, `professional`, or `school`, but the label space is not
/// closed: any non-empty answer is accepted and normalized to ASCII
/// lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Creates a validated, lowercased category label.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyCategory`] when the label is empty
    /// after trimming.
    pub fn new(label: impl Into<String>) -> Result<Self, TaskDomainError> {
        let normalized = label.into().trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyCategory);
        }
        Ok(Self(normalized))
    }

    /// Returns the label as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
