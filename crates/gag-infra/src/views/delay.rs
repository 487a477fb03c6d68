//! Simulated latency for view operations.
//!
//! A delayed update runs on its own task and applies a closure to the view
//! state once the delay elapses, unless the view's lifetime closes first.

use std::time::Duration;

use tokio::task::JoinHandle;

use super::ViewHandle;

/// Delays used to simulate fetches and uploads.
#[derive(Debug, Clone)]
pub struct LatencyConfig {
    /// First page of a freshly mounted feed.
    pub feed_initial: Duration,
    /// Each further feed page.
    pub feed_more: Duration,
    /// Upload submission.
    pub upload: Duration,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            feed_initial: Duration::from_millis(500),
            feed_more: Duration::from_millis(1000),
            upload: Duration::from_millis(2000),
        }
    }
}

impl LatencyConfig {
    pub fn from_env() -> Self {
        let millis = |key: &str, default: u64| {
            Duration::from_millis(
                std::env::var(key)
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(default),
            )
        };

        Self {
            feed_initial: millis("FEED_INITIAL_DELAY_MS", 500),
            feed_more: millis("FEED_LOAD_MORE_DELAY_MS", 1000),
            upload: millis("UPLOAD_DELAY_MS", 2000),
        }
    }

    /// No delays at all.
    pub fn immediate() -> Self {
        Self {
            feed_initial: Duration::ZERO,
            feed_more: Duration::ZERO,
            upload: Duration::ZERO,
        }
    }
}

impl<T: Send + 'static> ViewHandle<T> {
    /// Apply `update` to the view after `delay`.
    ///
    /// The task resolves to `true` when the update ran and `false` when the
    /// view was closed first; a closed view is never touched.
    pub fn after<F>(&self, delay: Duration, label: &'static str, update: F) -> JoinHandle<bool>
    where
        F: FnOnce(&mut T) + Send + 'static,
    {
        let state = self.state.clone();
        let lifetime = self.lifetime.clone();

        tokio::spawn(async move {
            tokio::select! {
                _ = lifetime.closed() => {
                    tracing::debug!(update = label, "View closed, delayed update dropped");
                    false
                }
                _ = tokio::time::sleep(delay) => {
                    let mut state = state.lock().await;
                    // The view may have closed while we waited for the lock.
                    if lifetime.is_closed() {
                        tracing::debug!(update = label, "View closed, delayed update dropped");
                        return false;
                    }
                    update(&mut state);
                    tracing::debug!(update = label, "Delayed update applied");
                    true
                }
            }
        })
    }
}
