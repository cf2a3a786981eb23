//! Dashboard statistics handler

use crate::db::queries::DASHBOARD_STATS;
use crate::error::ApiResult;
use crate::models::DashboardStats;
use crate::state::SharedState;
use axum::{extract::State, Json};

/// Aggregate counts for the citizen dashboard header
pub async fn get_stats(State(state): State<SharedState>) -> ApiResult<Json<DashboardStats>> {
    let row = state.db.query_one(DASHBOARD_STATS, &[]).await?;
    Ok(Json(DashboardStats::from_row(&row)))
}
