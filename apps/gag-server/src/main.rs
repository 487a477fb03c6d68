//! # Gag Server
//!
//! Actix-web server that mounts feed, post, profile and upload views over the
//! bundled fixture dataset.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod background;
mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use background::{Scheduler, SchedulerConfig};
use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();
    tracing::info!("Starting Gag Server on {}:{}", config.host, config.port);

    let state = AppState::new(&config);

    let scheduler = Scheduler::new(SchedulerConfig::from_env())
        .await
        .map_err(std::io::Error::other)?;
    background::register_view_sweeper(&scheduler, state.clone())
        .await
        .map_err(std::io::Error::other)?;
    scheduler.start().await.map_err(std::io::Error::other)?;

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
