//! Ports - trait definitions for external dependencies.
//! The fixture dataset in `gag-infra` is one implementation; a real backend
//! can replace it without touching the views.

mod repository;

pub use repository::{
    CatalogRepository, CommentRepository, ContentRepository, PostRepository, UserRepository,
};
