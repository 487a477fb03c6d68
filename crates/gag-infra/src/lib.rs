//! # Gag Infrastructure
//!
//! Concrete implementations of the ports defined in `gag-core`, plus the
//! runtime pieces views need: an in-memory view store and delayed updates
//! bound to each view's lifetime.
//!
//! Nothing here persists. Views and their votes, comments and uploads are
//! lost when they are unmounted, expire, or the process restarts.

pub mod fixtures;
pub mod views;

pub use fixtures::FixtureRepository;
pub use views::{LatencyConfig, ViewHandle, ViewLifetime, ViewStore, ViewStoreConfig};
