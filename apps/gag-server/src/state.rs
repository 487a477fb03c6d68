//! Application state - shared across all handlers.

use std::sync::Arc;

use gag_core::ports::ContentRepository;
use gag_core::view::{FeedState, LookupPolicy, PostDetailState, ProfileState, UploadForm};
use gag_infra::{FixtureRepository, LatencyConfig, ViewStore};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn ContentRepository>,
    pub feeds: Arc<ViewStore<FeedState>>,
    pub posts: Arc<ViewStore<PostDetailState>>,
    pub profiles: Arc<ViewStore<ProfileState>>,
    pub uploads: Arc<ViewStore<UploadForm>>,
    pub latency: LatencyConfig,
    pub lookup_policy: LookupPolicy,
}

impl AppState {
    /// Build the state over the bundled fixture dataset.
    pub fn new(config: &AppConfig) -> Self {
        Self::with_repo(Arc::new(FixtureRepository::bundled()), config)
    }

    pub fn with_repo(repo: Arc<dyn ContentRepository>, config: &AppConfig) -> Self {
        tracing::info!(
            lookup_policy = ?config.lookup_policy,
            idle_ttl_secs = config.views.idle_ttl.as_secs(),
            "Application state initialized"
        );

        Self {
            repo,
            feeds: Arc::new(ViewStore::new(config.views.clone())),
            posts: Arc::new(ViewStore::new(config.views.clone())),
            profiles: Arc::new(ViewStore::new(config.views.clone())),
            uploads: Arc::new(ViewStore::new(config.views.clone())),
            latency: config.latency.clone(),
            lookup_policy: config.lookup_policy,
        }
    }

    /// Drop idle views of every kind. Returns how many were dropped.
    pub async fn purge_expired_views(&self) -> usize {
        self.feeds.purge_expired().await
            + self.posts.purge_expired().await
            + self.profiles.purge_expired().await
            + self.uploads.purge_expired().await
    }
}
