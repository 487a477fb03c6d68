//! Mounted views: storage, lifetimes and delayed updates.

mod delay;
mod lifetime;
mod store;

pub use delay::LatencyConfig;
pub use lifetime::ViewLifetime;
pub use store::{ViewHandle, ViewStore, ViewStoreConfig};
