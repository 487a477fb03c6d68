//! In-memory store of mounted views.
//!
//! Each view is kept behind its own async mutex so interactions with
//! different views never contend. Views untouched for longer than the idle
//! TTL are dropped and their lifetimes closed.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{Mutex, MutexGuard, RwLock};
use uuid::Uuid;

use super::ViewLifetime;

/// View store configuration.
#[derive(Debug, Clone)]
pub struct ViewStoreConfig {
    /// How long a view may go without interaction before it is dropped.
    pub idle_ttl: Duration,
}

impl Default for ViewStoreConfig {
    fn default() -> Self {
        Self {
            idle_ttl: Duration::from_secs(30 * 60),
        }
    }
}

impl ViewStoreConfig {
    pub fn from_env() -> Self {
        Self {
            idle_ttl: Duration::from_secs(
                std::env::var("VIEW_IDLE_TTL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30 * 60),
            ),
        }
    }
}

/// Shared handle to one mounted view.
pub struct ViewHandle<T> {
    pub(super) state: Arc<Mutex<T>>,
    pub(super) lifetime: ViewLifetime,
}

impl<T> Clone for ViewHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            lifetime: self.lifetime.clone(),
        }
    }
}

impl<T> ViewHandle<T> {
    fn new(state: T) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            lifetime: ViewLifetime::new(),
        }
    }

    pub async fn lock(&self) -> MutexGuard<'_, T> {
        self.state.lock().await
    }

    pub fn lifetime(&self) -> &ViewLifetime {
        &self.lifetime
    }
}

struct Entry<T> {
    view: ViewHandle<T>,
    last_seen: Instant,
}

/// Views of one kind, keyed by a generated id.
pub struct ViewStore<T> {
    entries: RwLock<HashMap<Uuid, Entry<T>>>,
    config: ViewStoreConfig,
}

impl<T> ViewStore<T> {
    pub fn new(config: ViewStoreConfig) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            config,
        }
    }

    fn is_expired(&self, entry: &Entry<T>, now: Instant) -> bool {
        now.duration_since(entry.last_seen) > self.config.idle_ttl
    }

    /// Mount a view and return its id with a handle to it.
    pub async fn insert(&self, state: T) -> (Uuid, ViewHandle<T>) {
        let id = Uuid::new_v4();
        let view = ViewHandle::new(state);

        let mut entries = self.entries.write().await;
        entries.insert(
            id,
            Entry {
                view: view.clone(),
                last_seen: Instant::now(),
            },
        );
        tracing::debug!(view_id = %id, mounted = entries.len(), "View mounted");

        (id, view)
    }

    /// Look up a view and mark it as used. Expired views are dropped here.
    pub async fn get(&self, id: Uuid) -> Option<ViewHandle<T>> {
        let mut entries = self.entries.write().await;
        let now = Instant::now();

        let expired = self.is_expired(entries.get(&id)?, now);
        if expired {
            if let Some(entry) = entries.remove(&id) {
                entry.view.lifetime.close();
            }
            tracing::debug!(view_id = %id, "View expired");
            return None;
        }

        let entry = entries.get_mut(&id)?;
        entry.last_seen = now;
        Some(entry.view.clone())
    }

    /// Unmount a view, cancelling its pending delayed updates.
    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.entries.write().await.remove(&id);
        match removed {
            Some(entry) => {
                entry.view.lifetime.close();
                tracing::debug!(view_id = %id, "View unmounted");
                true
            }
            None => false,
        }
    }

    /// Drop every expired view. Returns how many were dropped.
    pub async fn purge_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let now = Instant::now();
        let before = entries.len();

        entries.retain(|_, entry| {
            let keep = now.duration_since(entry.last_seen) <= self.config.idle_ttl;
            if !keep {
                entry.view.lifetime.close();
            }
            keep
        });

        before - entries.len()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

impl<T> Default for ViewStore<T> {
    fn default() -> Self {
        Self::new(ViewStoreConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = ViewStore::default();
        let (id, _) = store.insert(41_u32).await;

        let view = store.get(id).await.unwrap();
        *view.lock().await += 1;
        assert_eq!(*store.get(id).await.unwrap().lock().await, 42);
    }

    #[tokio::test]
    async fn test_remove_closes_lifetime() {
        let store = ViewStore::default();
        let (id, view) = store.insert("feed").await;

        assert!(store.remove(id).await);
        assert!(view.lifetime().is_closed());
        assert!(store.get(id).await.is_none());
        assert!(!store.remove(id).await);
    }

    #[tokio::test]
    async fn test_idle_views_expire() {
        let store = ViewStore::new(ViewStoreConfig {
            idle_ttl: Duration::from_millis(10),
        });
        let (id, view) = store.insert(()).await;
        let (_, other) = store.insert(()).await;

        tokio::time::sleep(Duration::from_millis(30)).await;

        assert!(store.get(id).await.is_none());
        assert!(view.lifetime().is_closed());
        assert_eq!(store.purge_expired().await, 1);
        assert!(other.lifetime().is_closed());
        assert_eq!(store.len().await, 0);
    }
}
