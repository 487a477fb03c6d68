//! Application configuration loaded from environment variables.

use std::env;

use gag_core::view::LookupPolicy;
use gag_infra::{LatencyConfig, ViewStoreConfig};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// How unknown post ids and usernames are handled.
    pub lookup_policy: LookupPolicy,
    pub latency: LatencyConfig,
    pub views: ViewStoreConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let strict = env::var("STRICT_LOOKUPS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            lookup_policy: if strict {
                LookupPolicy::Strict
            } else {
                LookupPolicy::FallbackToFirst
            },
            latency: LatencyConfig::from_env(),
            views: ViewStoreConfig::from_env(),
        }
    }
}
