//! Single post page: the post, its comments and a few related posts.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::{LookupPolicy, PostCard};
use crate::domain::{Comment, Post, User, VoteDirection, VoteOutcome};
use crate::error::DomainError;
use crate::ports::ContentRepository;

/// How many other posts the sidebar lists.
pub const RELATED_POSTS: usize = 3;

/// Longest comment accepted.
pub const MAX_COMMENT_CHARS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommentError {
    #[error("Comment text is empty")]
    Blank,

    #[error("Comment is longer than {max} characters")]
    TooLong { max: usize },
}

#[derive(Debug, Clone)]
pub struct PostDetailState {
    card: PostCard,
    comments: Vec<Comment>,
    related: Vec<Post>,
    fallback: bool,
}

impl PostDetailState {
    /// Build the page for `post_id`.
    ///
    /// Under [`LookupPolicy::FallbackToFirst`] an unknown id shows the first
    /// post of the dataset; `fallback()` reports when that happened.
    pub async fn load(
        repo: &dyn ContentRepository,
        post_id: &str,
        policy: LookupPolicy,
    ) -> Result<Self, DomainError> {
        let posts = repo.list_posts().await?;
        let found = repo.find_post(post_id).await?;
        let lookup = policy.resolve(found, || posts.first().cloned(), "post", post_id)?;

        let comments = repo.list_comments(&lookup.value.id).await?;
        let mut state = Self::new(lookup.value, comments, &posts);
        state.fallback = lookup.fallback;
        Ok(state)
    }

    pub fn new(post: Post, comments: Vec<Comment>, all_posts: &[Post]) -> Self {
        let related = all_posts
            .iter()
            .filter(|p| p.id != post.id)
            .take(RELATED_POSTS)
            .cloned()
            .collect();

        Self {
            card: PostCard::new(post),
            comments,
            related,
            fallback: false,
        }
    }

    pub fn card(&self) -> &PostCard {
        &self.card
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn related(&self) -> &[Post] {
        &self.related
    }

    /// Whether the requested id was missing and the first post is shown.
    pub fn fallback(&self) -> bool {
        self.fallback
    }

    /// Comment count as displayed on the page: the local list length.
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    pub fn vote(&mut self, direction: VoteDirection) -> VoteOutcome {
        self.card.vote(direction)
    }

    /// Prepend a comment by the current viewer. The text is kept as typed.
    pub fn add_comment(&mut self, text: &str, now: DateTime<Utc>) -> Result<&Comment, CommentError> {
        if text.trim().is_empty() {
            return Err(CommentError::Blank);
        }
        if text.chars().count() > MAX_COMMENT_CHARS {
            return Err(CommentError::TooLong {
                max: MAX_COMMENT_CHARS,
            });
        }

        let mut id = now.timestamp_millis().to_string();
        if self.comments.iter().any(|c| c.id == id) {
            id = format!("{id}-{}", self.comments.len());
        }

        let comment = Comment::new(
            id,
            self.card.post.id.clone(),
            User::current_viewer(),
            text.to_string(),
            now,
        );
        self.comments.insert(0, comment);
        Ok(&self.comments[0])
    }
}
