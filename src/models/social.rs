//! Social graph models

use serde::Serialize;

/// Follower/following counts for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FollowStats {
    pub followers_count: u32,
    pub following_count: u32,
}
