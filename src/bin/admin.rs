//! Admin reporting server
//!
//! Read-only aggregation endpoints over the same schema as the citizen API,
//! running with its own independent connection pool.

use gramseva_api::config::Settings;
use gramseva_api::db::Database;
use gramseva_api::routes::create_admin_router;
use gramseva_api::state::AppState;
use gramseva_api::{init_tracing, shutdown_signal};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting Gram Seva admin reporting server...");

    let settings = Settings::load()?;
    info!("Configuration loaded successfully");

    // Same fail-fast policy as the citizen server
    let db = match Database::connect(&settings.database).await {
        Ok(db) => db,
        Err(e) => {
            error!("FATAL: Failed to initialize database pool: {}", e);
            error!("Set DATABASE_URL (or DB_* variables) and make sure the database is reachable");
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState::new(db));
    let app = create_admin_router(state.clone(), &settings);

    let addr = SocketAddr::from((settings.server.host, settings.server.admin_port));

    info!("Admin server listening on http://{}", addr);
    info!("");
    info!("Report Endpoints:");
    info!("   GET /api/summary              - Executive summary");
    info!("   GET /api/villages             - Villages overview");
    info!("   GET /api/resources-summary    - Resource distribution");
    info!("   GET /api/top-resources        - Resources by village");
    info!("   GET /api/complaints-status    - Complaint status breakdown");
    info!("   GET /api/recent-complaints    - Recent complaints");
    info!("   GET /api/project-performance  - Project performance");
    info!("   GET /api/work-reviews         - Work review summary");
    info!("");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.db.close();
    info!("Admin server shutdown complete");
    Ok(())
}
