//! Application services for social graph orchestration.

mod friendship;

pub use friendship::{FriendshipError, FriendshipResult, FriendshipService, ReceiverRef};
