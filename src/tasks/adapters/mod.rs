//! Adapter implementations for task ports.

pub mod keyword;
pub mod memory;

pub use keyword::KeywordCategorizer;
