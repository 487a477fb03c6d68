//! HTTP handlers and route configuration.

mod catalog;
mod feed;
mod health;
mod post;
mod profile;
mod upload;

use actix_web::web;
use gag_infra::{ViewHandle, ViewStore};
use uuid::Uuid;

use crate::middleware::error::{self, AppError, AppResult};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error))
        .app_data(web::PathConfig::default().error_handler(error::path_error))
        .app_data(web::QueryConfig::default().error_handler(error::query_error));

    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/routes/resolve", web::get().to(catalog::resolve_route))
            .route("/categories", web::get().to(catalog::categories))
            .route("/interests", web::get().to(catalog::interests))
            .service(
                web::scope("/views")
                    .service(
                        web::scope("/feed")
                            .route("", web::post().to(feed::mount))
                            .route("/{view}", web::get().to(feed::snapshot))
                            .route("/{view}", web::delete().to(feed::unmount))
                            .route("/{view}/load-more", web::post().to(feed::load_more))
                            .route("/{view}/scroll", web::post().to(feed::scroll))
                            .route("/{view}/posts/{post}/vote", web::post().to(feed::vote)),
                    )
                    .service(
                        web::scope("/post")
                            .route("", web::post().to(post::mount))
                            .route("/{view}", web::get().to(post::snapshot))
                            .route("/{view}", web::delete().to(post::unmount))
                            .route("/{view}/vote", web::post().to(post::vote))
                            .route("/{view}/comments", web::post().to(post::add_comment)),
                    )
                    .service(
                        web::scope("/profile")
                            .route("", web::post().to(profile::mount))
                            .route("/{view}", web::get().to(profile::snapshot))
                            .route("/{view}", web::delete().to(profile::unmount))
                            .route("/{view}/follow", web::post().to(profile::toggle_follow))
                            .route("/{view}/posts/{post}/vote", web::post().to(profile::vote)),
                    )
                    .service(
                        web::scope("/upload")
                            .route("", web::post().to(upload::mount))
                            .route("/{view}", web::get().to(upload::snapshot))
                            .route("/{view}", web::patch().to(upload::edit))
                            .route("/{view}", web::delete().to(upload::unmount))
                            .route("/{view}/file", web::post().to(upload::choose_file))
                            .route("/{view}/drag", web::post().to(upload::drag))
                            .route("/{view}/submit", web::post().to(upload::submit)),
                    ),
            ),
    );
}

/// Look up a mounted view or answer 404.
async fn mounted<T>(store: &ViewStore<T>, kind: &str, id: Uuid) -> AppResult<ViewHandle<T>> {
    store
        .get(id)
        .await
        .ok_or_else(|| AppError::view_not_found(kind, id))
}

/// Unmount a view or answer 404.
async fn unmount_view<T>(store: &ViewStore<T>, kind: &str, id: Uuid) -> AppResult<()> {
    if store.remove(id).await {
        Ok(())
    } else {
        Err(AppError::view_not_found(kind, id))
    }
}

#[cfg(test)]
pub(crate) mod test_app {
    use gag_core::view::LookupPolicy;
    use gag_infra::{LatencyConfig, ViewStoreConfig};

    use crate::config::AppConfig;

    pub fn config() -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            lookup_policy: LookupPolicy::FallbackToFirst,
            latency: LatencyConfig::immediate(),
            views: ViewStoreConfig::default(),
        }
    }

    /// Let zero-delay updates run.
    pub async fn settle() {
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }

    /// Build a test service over the fixture dataset.
    macro_rules! init_app {
        ($config:expr) => {
            actix_web::test::init_service(
                actix_web::App::new()
                    .app_data(actix_web::web::Data::new(crate::state::AppState::new(&$config)))
                    .configure(crate::handlers::configure_routes),
            )
            .await
        };
    }

    pub(crate) use init_app;
}
