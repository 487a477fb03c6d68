//! Fixture-backed repository - the only data source of the application.
//!
//! Every read returns clones of the bundled dataset; nothing can be written.

mod dataset;

use async_trait::async_trait;

use gag_core::domain::{Category, Comment, Interest, Post, User};
use gag_core::error::RepoError;
use gag_core::ports::{CatalogRepository, CommentRepository, PostRepository, UserRepository};

/// Read-only repository over an in-memory dataset.
#[derive(Debug, Clone, Default)]
pub struct FixtureRepository {
    users: Vec<User>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
    categories: Vec<Category>,
    interests: Vec<Interest>,
}

impl FixtureRepository {
    /// Repository over the bundled dataset.
    pub fn bundled() -> Self {
        let users = dataset::users();
        let posts = dataset::posts(&users);
        let comments = dataset::comments(&users);

        tracing::debug!(
            users = users.len(),
            posts = posts.len(),
            comments = comments.len(),
            "Fixture dataset loaded"
        );

        Self {
            users,
            posts,
            comments,
            categories: dataset::categories(),
            interests: dataset::interests(),
        }
    }

    /// Repository over caller-supplied records. Catalogues stay empty.
    pub fn from_records(users: Vec<User>, posts: Vec<Post>, comments: Vec<Comment>) -> Self {
        Self {
            users,
            posts,
            comments,
            ..Self::default()
        }
    }
}

#[async_trait]
impl PostRepository for FixtureRepository {
    async fn list_posts(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.clone())
    }

    async fn find_post(&self, id: &str) -> Result<Option<Post>, RepoError> {
        Ok(self.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_posts_by_author(&self, username: &str) -> Result<Vec<Post>, RepoError> {
        Ok(self
            .posts
            .iter()
            .filter(|p| p.is_by(username))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CommentRepository for FixtureRepository {
    async fn list_comments(&self, post_id: &str) -> Result<Vec<Comment>, RepoError> {
        Ok(self
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl UserRepository for FixtureRepository {
    async fn list_users(&self) -> Result<Vec<User>, RepoError> {
        Ok(self.users.clone())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        Ok(self.users.iter().find(|u| u.username == username).cloned())
    }
}

#[async_trait]
impl CatalogRepository for FixtureRepository {
    async fn categories(&self) -> Result<Vec<Category>, RepoError> {
        Ok(self.categories.clone())
    }

    async fn interests(&self) -> Result<Vec<Interest>, RepoError> {
        Ok(self.interests.clone())
    }
}
