use chrono::{NaiveDate, TimeZone, Utc};

use crate::domain::{Comment, MediaKind, Post, User};

pub fn user(id: &str, username: &str) -> User {
    User {
        id: id.to_string(),
        username: username.to_string(),
        avatar: format!("https://example.test/{username}.png"),
        bio: String::new(),
        followers: 10,
        following: 5,
        upvotes_received: 100,
        join_date: NaiveDate::from_ymd_opt(2022, 1, 15).unwrap(),
    }
}

pub fn post(id: &str, score: i64, author: &User) -> Post {
    Post {
        id: id.to_string(),
        title: format!("post {id}"),
        media_url: format!("https://example.test/{id}.jpg"),
        media_kind: MediaKind::Image,
        category: "funny".to_string(),
        tags: vec!["relatable".to_string()],
        author: author.clone(),
        upvotes: 10,
        downvotes: 1,
        score,
        comment_count: 0,
        views: 100,
        created_at: Utc.with_ymd_and_hms(2025, 1, 10, 10, 30, 0).unwrap(),
        nsfw: false,
    }
}

pub fn comment(id: &str, post_id: &str, author: &User) -> Comment {
    Comment::new(
        id.to_string(),
        post_id.to_string(),
        author.clone(),
        format!("comment {id}"),
        Utc.with_ymd_and_hms(2025, 1, 10, 11, 0, 0).unwrap(),
    )
}

/// Five posts split across two authors, like the bundled dataset.
pub fn posts() -> Vec<Post> {
    let alice = user("1", "alice");
    let bob = user("2", "bob");
    vec![
        post("1", 1478, &alice),
        post("2", 2318, &bob),
        post("3", 920, &bob),
        post("4", 3387, &alice),
        post("5", 785, &bob),
    ]
}
