use async_trait::async_trait;

use crate::domain::{Category, Comment, Interest, Post, User};
use crate::error::RepoError;

/// Read access to posts, in feed order.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// List every post.
    async fn list_posts(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its id.
    async fn find_post(&self, id: &str) -> Result<Option<Post>, RepoError>;

    /// List the posts authored by `username`.
    async fn find_posts_by_author(&self, username: &str) -> Result<Vec<Post>, RepoError>;
}

/// Read access to comments.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// List the comments on a post, in display order.
    async fn list_comments(&self, post_id: &str) -> Result<Vec<Comment>, RepoError>;
}

/// Read access to user profiles.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, RepoError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;
}

/// Static navigation and tagging catalogues.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn categories(&self) -> Result<Vec<Category>, RepoError>;

    async fn interests(&self) -> Result<Vec<Interest>, RepoError>;
}

/// Everything a view needs to read.
pub trait ContentRepository:
    PostRepository + CommentRepository + UserRepository + CatalogRepository
{
}

impl<T> ContentRepository for T where
    T: PostRepository + CommentRepository + UserRepository + CatalogRepository
{
}
