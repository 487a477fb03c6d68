//! # Gag Core
//!
//! The domain layer of the gagfeed meme feed.
//! This crate contains the entities, the vote transition, the per-view state
//! machines and the route table. It performs no I/O: timers and storage are
//! supplied by `gag-infra`.

pub mod display;
pub mod domain;
pub mod error;
pub mod ports;
pub mod route;
pub mod view;

pub use error::DomainError;

#[cfg(test)]
pub(crate) mod test_support;
