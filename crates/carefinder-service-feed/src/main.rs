//! CareFinder map feed HTTP microservice binary.
//!
//! Serves location/text/category filtered provider lookups shaped for the
//! external "custom map" feed renderer.
//!
//! # Endpoints
//!
//! - `GET /map_feed?q=&category=&location=&limit=` - filtered provider feed
//! - `GET /health` - liveness probe
//!
//! # Configuration
//!
//! - `DATABASE_URL` - provider database (default: sqlite:carefinder.db?mode=rwc)
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `DB_MAX_CONNECTIONS` - connection pool bound (default: 5)
//! - `RUST_LOG` - log level (default: info)
//! - `LOG_FORMAT` - log format: json (default) or text

use std::net::SocketAddr;

use tracing::{error, info};

use carefinder_service_feed::logging::{init_logging, LogFormat};
use carefinder_service_feed::{app, AppState, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(LogFormat::from_env());

    let config = ServiceConfig::from_env();
    info!(
        database_url = %config.database_url,
        port = config.port,
        max_connections = config.max_connections,
        "starting map feed service"
    );

    let state = AppState::init(&config).await.map_err(|e| {
        error!(error = %e, "failed to initialize application state");
        e
    })?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
