//! Domain model for the social graph.
//!
//! The social domain models user records with their set-valued relation
//! fields (friends, pending requests sent, pending requests received) while
//! keeping all infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod mutation;
mod user;

pub use error::SocialDomainError;
pub use ids::{EmailAddress, UserId};
pub use mutation::{RelationField, RelationMutation, SetOp};
pub use user::{Relationship, User};
