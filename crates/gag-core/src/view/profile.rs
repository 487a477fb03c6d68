//! User profile page.

use super::{LookupPolicy, PostCard};
use crate::domain::{User, VoteDirection, VoteOutcome};
use crate::error::DomainError;
use crate::ports::ContentRepository;

#[derive(Debug, Clone)]
pub struct ProfileState {
    user: User,
    cards: Vec<PostCard>,
    following: bool,
    fallback: bool,
}

impl ProfileState {
    /// Build the profile for `username`, falling back to the first user
    /// under the default lookup policy.
    pub async fn load(
        repo: &dyn ContentRepository,
        username: &str,
        policy: LookupPolicy,
    ) -> Result<Self, DomainError> {
        let found = repo.find_by_username(username).await?;
        let first = match found {
            Some(_) => None,
            None => repo.list_users().await?.into_iter().next(),
        };
        let lookup = policy.resolve(found, || first, "user", username)?;

        let posts = repo.find_posts_by_author(&lookup.value.username).await?;
        Ok(Self {
            user: lookup.value,
            cards: posts.into_iter().map(PostCard::new).collect(),
            following: false,
            fallback: lookup.fallback,
        })
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn cards(&self) -> &[PostCard] {
        &self.cards
    }

    pub fn is_following(&self) -> bool {
        self.following
    }

    /// Whether the requested username was missing and the first user is
    /// shown.
    pub fn fallback(&self) -> bool {
        self.fallback
    }

    /// Flip the local follow flag. The displayed follower count is not
    /// affected.
    pub fn toggle_follow(&mut self) -> bool {
        self.following = !self.following;
        self.following
    }

    pub fn vote(&mut self, post_id: &str, direction: VoteDirection) -> Option<VoteOutcome> {
        self.cards
            .iter_mut()
            .find(|card| card.post.id == post_id)
            .map(|card| card.vote(direction))
    }
}
