use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MediaKind, User};

/// Post entity - a single meme with its media and counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub media_url: String,
    pub media_kind: MediaKind,
    pub category: String,
    pub tags: Vec<String>,
    pub author: User,
    pub upvotes: u32,
    pub downvotes: u32,
    /// Fixture-defined base score. Not derived from `upvotes - downvotes`.
    pub score: i64,
    pub comment_count: u32,
    pub views: u32,
    pub created_at: DateTime<Utc>,
    pub nsfw: bool,
}

impl Post {
    /// Copy this post under a new id and timestamp.
    ///
    /// Used by the feed to fabricate further pages out of the fixture list.
    pub fn rekeyed(&self, id: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at,
            ..self.clone()
        }
    }

    pub fn is_by(&self, username: &str) -> bool {
        self.author.username == username
    }
}
