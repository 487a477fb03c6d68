use serde::Serialize;

use crate::domain::{Post, VoteDirection, VoteOutcome, VoteState, apply_vote};

/// A post as shown in a list or on its own page, with the viewer's vote.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostCard {
    pub post: Post,
    pub vote: VoteState,
}

impl PostCard {
    pub fn new(post: Post) -> Self {
        Self {
            post,
            vote: VoteState::None,
        }
    }

    /// Score to display: base score adjusted by the viewer's vote.
    pub fn score(&self) -> i64 {
        self.post.score + self.vote.delta()
    }

    pub fn vote(&mut self, direction: VoteDirection) -> VoteOutcome {
        let outcome = apply_vote(self.post.score, self.vote, direction);
        self.vote = outcome.state;
        outcome
    }
}
