//! Citizen API server
//!
//! Serves the village dashboard: CRUD over villages, resources, complaints,
//! development projects, and work reviews.

use gramseva_api::config::Settings;
use gramseva_api::db::Database;
use gramseva_api::routes::create_router;
use gramseva_api::state::AppState;
use gramseva_api::{init_tracing, shutdown_signal};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting Gram Seva citizen API...");

    let settings = Settings::load()?;
    info!("Configuration loaded successfully");

    // The pool is a startup precondition: refuse to serve without it
    let db = match Database::connect(&settings.database).await {
        Ok(db) => db,
        Err(e) => {
            error!("FATAL: Failed to initialize database pool: {}", e);
            error!("Set DATABASE_URL (or DB_* variables) and make sure the database is reachable");
            std::process::exit(1);
        }
    };

    if let Err(e) = db.ensure_schema().await {
        warn!("Warning creating tables: {}", e);
    }

    let state = Arc::new(AppState::new(db));
    let app = create_router(state.clone(), &settings);

    let addr = SocketAddr::from((settings.server.host, settings.server.port));

    info!("Server listening on http://{}", addr);
    info!("");
    info!("API Endpoints:");
    info!("   GET  /api/stats                    - Dashboard counts");
    info!("   GET  /api/villages                 - List villages");
    info!("   GET  /api/villages/:id             - Village profile");
    info!("   GET  /api/villages/search/:query   - Search villages");
    info!("   POST /api/villages                 - Register village");
    info!("   GET  /api/complaints               - List complaints");
    info!("   POST /api/complaints               - File complaint");
    info!("   PUT  /api/complaints/:id           - Update complaint status");
    info!("   PUT  /api/complaints/:id/resolve   - Resolve complaint");
    info!("   GET  /api/projects                 - List projects");
    info!("   GET  /api/resources                - List resources");
    info!("   POST /api/resources                - Record resource");
    info!("   POST /api/reviews                  - Submit work review");
    info!("");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.db.close();
    info!("Server shutdown complete");
    Ok(())
}
