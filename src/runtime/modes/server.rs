//! Server mode
//!
//! Loads the dataset, then serves the dashboard page and its JSON API.

use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders},
    web,
};
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use crate::api::middleware::{RequestIdMiddleware, TimingMiddleware};
use crate::api::services::{AppStartTime, dashboard_routes, frontend_routes, health_routes};
use crate::config::get_config;
use crate::dashboard::Dashboard;
use crate::runtime::lifetime;

/// Register shared state and all routes
///
/// The frontend scope matches every path, so it goes last.
pub fn configure_app(
    dashboard: Arc<Dashboard>,
    app_start_time: AppStartTime,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(dashboard))
            .app_data(web::Data::new(app_start_time))
            .service(dashboard_routes())
            .service(health_routes())
            .service(frontend_routes());
    }
}

/// Run the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server() -> Result<()> {
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    let config = get_config();
    let startup = lifetime::startup::prepare_server_startup(&config).map_err(|e| {
        tracing::error!("Server startup failed: {:#}", e);
        e
    })?;
    let dashboard = startup.dashboard;

    let workers = config.server.workers.clamp(1, 32);
    info!("Using {} worker(s)", workers);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TimingMiddleware)
            .wrap(RequestIdMiddleware)
            .wrap(Compress::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            .app_data(web::PayloadConfig::new(64 * 1024))
            .configure(configure_app(dashboard.clone(), app_start_time.clone()))
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .workers(workers);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    warn!("Starting dashboard at http://{}", bind_address);
    let server = server.bind(&bind_address)?.run();

    tokio::select! {
        res = server => {
            res?;
        }
        _ = lifetime::shutdown::listen_for_shutdown() => {
            warn!("Graceful shutdown complete");
        }
    }

    Ok(())
}
