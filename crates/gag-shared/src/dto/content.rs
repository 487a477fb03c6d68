use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use gag_core::display::format_count;
use gag_core::domain::{
    Category, Comment, Interest, MediaKind, Post, Reply, User, VoteOutcome, VoteState,
};
use gag_core::view::PostCard;

/// A user's public profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub avatar: String,
    pub bio: String,
    pub followers: u32,
    pub following: u32,
    pub upvotes_received: u32,
    pub join_date: NaiveDate,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            avatar: user.avatar.clone(),
            bio: user.bio.clone(),
            followers: user.followers,
            following: user.following,
            upvotes_received: user.upvotes_received,
            join_date: user.join_date,
        }
    }
}

/// A post card: the post plus the viewer's vote and display labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub media_type: MediaKind,
    pub media_url: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author: UserResponse,
    pub upvotes: u32,
    pub downvotes: u32,
    /// Score after the viewer's vote.
    pub score: i64,
    /// Score as stored, before the viewer's vote.
    pub base_score: i64,
    pub score_label: String,
    pub user_vote: VoteState,
    pub comment_count: u32,
    pub comment_label: String,
    pub views: u32,
    pub views_label: String,
    pub nsfw: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&PostCard> for PostResponse {
    fn from(card: &PostCard) -> Self {
        let post = &card.post;
        let score = card.score();
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            media_type: post.media_kind,
            media_url: post.media_url.clone(),
            category: post.category.clone(),
            tags: post.tags.clone(),
            author: UserResponse::from(&post.author),
            upvotes: post.upvotes,
            downvotes: post.downvotes,
            score,
            base_score: post.score,
            score_label: format_count(score),
            user_vote: card.vote,
            comment_count: post.comment_count,
            comment_label: format_count(post.comment_count.into()),
            views: post.views,
            views_label: format_count(post.views.into()),
            nsfw: post.nsfw,
            created_at: post.created_at,
        }
    }
}

/// Compact entry for the related-posts sidebar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedPostResponse {
    pub id: String,
    pub title: String,
    pub media_url: String,
    pub score: i64,
    pub score_label: String,
}

impl From<&Post> for RelatedPostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            media_url: post.media_url.clone(),
            score: post.score,
            score_label: format_count(post.score),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyResponse {
    pub id: String,
    pub author: UserResponse,
    pub text: String,
    pub upvotes: u32,
    pub downvotes: u32,
    pub score: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&Reply> for ReplyResponse {
    fn from(reply: &Reply) -> Self {
        Self {
            id: reply.id.clone(),
            author: UserResponse::from(&reply.author),
            text: reply.text.clone(),
            upvotes: reply.upvotes,
            downvotes: reply.downvotes,
            score: reply.score,
            created_at: reply.created_at,
        }
    }
}

/// A comment with its replies. Comment scores are display-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    pub author: UserResponse,
    pub text: String,
    pub upvotes: u32,
    pub downvotes: u32,
    pub score: i64,
    pub replies: Vec<ReplyResponse>,
    pub created_at: DateTime<Utc>,
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.clone(),
            post_id: comment.post_id.clone(),
            author: UserResponse::from(&comment.author),
            text: comment.text.clone(),
            upvotes: comment.upvotes,
            downvotes: comment.downvotes,
            score: comment.score,
            replies: comment.replies.iter().map(ReplyResponse::from).collect(),
            created_at: comment.created_at,
        }
    }
}

/// Result of a vote click.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteResponse {
    pub post_id: String,
    pub score: i64,
    pub score_label: String,
    pub user_vote: VoteState,
}

impl VoteResponse {
    pub fn new(post_id: impl Into<String>, outcome: VoteOutcome) -> Self {
        Self {
            post_id: post_id.into(),
            score: outcome.score,
            score_label: format_count(outcome.score),
            user_vote: outcome.state,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub icon: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            icon: category.icon,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestResponse {
    pub id: String,
    pub name: String,
    pub color: String,
}

impl From<Interest> for InterestResponse {
    fn from(interest: Interest) -> Self {
        Self {
            id: interest.id,
            name: interest.name,
            color: interest.color,
        }
    }
}
