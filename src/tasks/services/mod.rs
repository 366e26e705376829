//! Application services for task intake and the friends' task feed.

mod feed;
mod intake;

pub use feed::{FriendFeedError, FriendFeedResult, FriendFeedService, FriendTask, FriendTaskFeed};
pub use intake::{CreateTaskRequest, TaskIntakeError, TaskIntakeResult, TaskIntakeService};
