use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::User;

/// Comment on a post, carrying at most one level of replies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub author: User,
    pub text: String,
    pub upvotes: u32,
    pub downvotes: u32,
    pub score: i64,
    pub replies: Vec<Reply>,
    pub created_at: DateTime<Utc>,
}

/// Reply embedded in a [`Comment`]. Not independently addressable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub id: String,
    pub author: User,
    pub text: String,
    pub upvotes: u32,
    pub downvotes: u32,
    pub score: i64,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// A fresh comment written by `author` in the current session.
    pub fn new(id: String, post_id: String, author: User, text: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            post_id,
            author,
            text,
            upvotes: 0,
            downvotes: 0,
            score: 0,
            replies: Vec::new(),
            created_at: now,
        }
    }
}
