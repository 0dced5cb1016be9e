use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type AccountId = u64;
pub type PostId = u64;
pub type CommentId = u64;

/// Post ids liked in the current session. Not keyed by account.
pub type LikedSet = BTreeSet<PostId>;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub username: String,
    pub email: String,
    pub password: String,
    pub bio: String,
    pub followers: u32,
    pub following: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Post {
    pub id: PostId,
    #[serde(rename = "userId")]
    pub author_id: AccountId,
    /// Copied from the author at creation time.
    #[serde(rename = "username")]
    pub author_username: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub likes: u32,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Comment {
    pub id: CommentId,
    #[serde(rename = "userId")]
    pub author_id: AccountId,
    #[serde(rename = "username")]
    pub author_username: String,
    pub content: String,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Result of flipping a like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LikeOutcome {
    pub post_id: PostId,
    pub liked: bool,
    pub likes: u32,
}
