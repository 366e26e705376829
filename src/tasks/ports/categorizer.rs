//! Categorizer port for free-text task labelling.

use crate::tasks::domain::{Category, TaskDomainError};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for categorizer operations.
pub type CategorizerResult<T> = Result<T, CategorizerError>;

/// Contract for the external service that maps a task description to a
/// category label.
///
/// Failures propagate unchanged to the caller: there is no retry and no
/// fallback category.
#[async_trait]
pub trait Categorizer: Send + Sync {
    /// Maps a free-text description to a category label.
    ///
    /// # Errors
    ///
    /// Returns [`CategorizerError::Service`] when the external call fails
    /// or [`CategorizerError::InvalidLabel`] when the service answers with
    /// an unusable label.
    async fn categorize(&self, description: &str) -> CategorizerResult<Category>;
}

/// Errors returned by categorizer implementations.
#[derive(Debug, Clone, Error)]
pub enum CategorizerError {
    /// The external categorization call failed or timed out.
    #[error("categorizer service error: {0}")]
    Service(Arc<dyn std::error::Error + Send + Sync>),

    /// The service answered with a label that fails domain validation.
    #[error(transparent)]
    InvalidLabel(#[from] TaskDomainError),
}

impl CategorizerError {
    /// Wraps an external service error.
    pub fn service(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Service(Arc::new(err))
    }
}
