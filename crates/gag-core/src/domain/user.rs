use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// User entity - a profile that authors posts and comments.
///
/// Users are fixture-defined and never change at runtime; following a user
/// is a view-local toggle and does not touch `followers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    /// Unique, used as the `/u/:username` routing key.
    pub username: String,
    pub avatar: String,
    pub bio: String,
    pub followers: u32,
    pub following: u32,
    pub upvotes_received: u32,
    pub join_date: NaiveDate,
}

impl User {
    /// Placeholder author used for comments written in the current session.
    pub fn current_viewer() -> Self {
        Self {
            id: "1".to_string(),
            username: "currentUser".to_string(),
            avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face"
                .to_string(),
            bio: String::new(),
            followers: 0,
            following: 0,
            upvotes_received: 0,
            join_date: NaiveDate::default(),
        }
    }
}
