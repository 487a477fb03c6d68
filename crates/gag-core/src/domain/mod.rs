//! Domain entities - the core business objects.

mod catalog;
mod comment;
mod media;
mod post;
mod user;

pub mod vote;

pub use catalog::{Category, Interest};
pub use comment::{Comment, Reply};
pub use media::{MediaError, MediaFile, MediaKind};
pub use post::Post;
pub use user::User;
pub use vote::{VoteDirection, VoteOutcome, VoteState, apply_vote};
