//! Route definitions and router setup
//!
//! Configures the citizen API router, the admin reporting router, and the
//! middleware both run behind.

mod complaints;
mod projects;
mod reports;
mod resources;
mod reviews;
mod stats;
mod villages;

use crate::config::Settings;
use crate::state::SharedState;
use axum::{
    http::{header, Method},
    routing::{get, post, put},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::MakeRequestUuid,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
    ServiceBuilderExt,
};
use tracing::Level;

/// Create the citizen API router with all routes and middleware
pub fn create_router(state: SharedState, settings: &Settings) -> Router {
    // Build CORS layer
    let cors = build_cors_layer(settings);

    // Build tracing/logging layer
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Build middleware stack
    let middleware = ServiceBuilder::new()
        .set_x_request_id(MakeRequestUuid)
        .layer(trace_layer)
        .layer(CompressionLayer::new())
        .layer(cors)
        .propagate_x_request_id();

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Dashboard aggregates
        .route("/api/stats", get(stats::get_stats))
        // Villages
        .route(
            "/api/villages",
            get(villages::list_villages).post(villages::create_village),
        )
        .route("/api/villages/{id}", get(villages::get_village))
        .route("/api/villages/search/{query}", get(villages::search_villages))
        // Complaints
        .route(
            "/api/complaints",
            get(complaints::list_complaints).post(complaints::create_complaint),
        )
        .route("/api/complaints/{id}", put(complaints::update_complaint_status))
        .route("/api/complaints/{id}/resolve", put(complaints::resolve_complaint))
        // Projects
        .route("/api/projects", get(projects::list_projects))
        // Resources
        .route(
            "/api/resources",
            get(resources::list_resources).post(resources::create_resource),
        )
        // Reviews
        .route("/api/reviews", post(reviews::create_review))
        // Apply middleware and state
        .layer(middleware)
        .with_state(state)
}

/// Create the admin reporting router: read-only aggregation endpoints
pub fn create_admin_router(state: SharedState, settings: &Settings) -> Router {
    let cors = build_cors_layer(settings);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let middleware = ServiceBuilder::new()
        .set_x_request_id(MakeRequestUuid)
        .layer(trace_layer)
        .layer(CompressionLayer::new())
        .layer(cors)
        .propagate_x_request_id();

    Router::new()
        .route("/health", get(health_check))
        .route("/api/summary", get(reports::summary))
        .route("/api/villages", get(reports::villages_overview))
        .route("/api/resources-summary", get(reports::resources_summary))
        .route("/api/top-resources", get(reports::top_resources))
        .route("/api/complaints-status", get(reports::complaints_status))
        .route("/api/recent-complaints", get(reports::recent_complaints))
        .route("/api/project-performance", get(reports::project_performance))
        .route("/api/work-reviews", get(reports::work_reviews))
        .layer(middleware)
        .with_state(state)
}

/// Build CORS layer from settings
fn build_cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<_> = settings
        .cors
        .allowed_origins
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .max_age(Duration::from_secs(3600))
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .max_age(Duration::from_secs(3600))
    }
}

/// Health check endpoint
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "success": true,
        "message": "Server is running fine.",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
