//! Deterministic keyword categorizer.
//!
//! Stands in for the hosted generative model in tests and local runs. The
//! keyword table mirrors the labels the hosted model is prompted with:
//! `urgent`, `professional`, `school`, and the `personal` fallback.

use crate::tasks::{
    domain::Category,
    ports::{Categorizer, CategorizerResult},
};
use async_trait::async_trait;

/// Keyword fragments mapped to category labels; first match wins.
const KEYWORD_LABELS: &[(&str, &str)] = &[
    ("exam", "urgent"),
    ("deadline", "urgent"),
    ("tonight", "urgent"),
    ("internship", "professional"),
    ("interview", "professional"),
    ("apply", "professional"),
    ("study", "school"),
    ("homework", "school"),
    ("class", "school"),
];

/// Label assigned when no keyword matches.
const FALLBACK_LABEL: &str = "personal";

/// Categorizer that labels descriptions by keyword lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordCategorizer;

impl KeywordCategorizer {
    /// Creates a keyword categorizer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Categorizer for KeywordCategorizer {
    async fn categorize(&self, description: &str) -> CategorizerResult<Category> {
        let normalized = description.to_ascii_lowercase();
        let mut label = FALLBACK_LABEL;
        for &(keyword, candidate) in KEYWORD_LABELS {
            if normalized.contains(keyword) {
                label = candidate;
                break;
            }
        }
        Ok(Category::new(label)?)
    }
}
