//! Domain model for tasks.
//!
//! The task domain models owner-scoped task records with their categorizer
//! label and privacy flag, keeping all infrastructure concerns outside of
//! the domain boundary.

mod category;
mod error;
mod ids;
mod task;

pub use category::Category;
pub use error::TaskDomainError;
pub use ids::TaskId;
pub use task::Task;
