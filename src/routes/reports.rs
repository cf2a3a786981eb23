//! Admin reporting handlers
//!
//! Read-only aggregation queries for the admin dashboard. Every endpoint is
//! one statement through the shared executor.

use crate::db::queries::{
    REPORT_COMPLAINTS_STATUS, REPORT_PROJECT_PERFORMANCE, REPORT_RECENT_COMPLAINTS,
    REPORT_RESOURCES_SUMMARY, REPORT_SUMMARY, REPORT_TOP_RESOURCES, REPORT_VILLAGES,
    REPORT_WORK_REVIEWS,
};
use crate::error::ApiResult;
use crate::models::{
    ComplaintStatusBreakdown, ProjectPerformance, RecentComplaint, ResourceTypeSummary,
    SummaryMetric, TopResource, Village, WorkReviewSummary,
};
use crate::state::SharedState;
use axum::{extract::State, Json};

/// Executive summary: labeled metric/value rows
pub async fn summary(State(state): State<SharedState>) -> ApiResult<Json<Vec<SummaryMetric>>> {
    let rows = state.db.query(REPORT_SUMMARY, &[]).await?;
    Ok(Json(rows.iter().map(SummaryMetric::from_row).collect()))
}

/// Villages overview ordered by id
pub async fn villages_overview(State(state): State<SharedState>) -> ApiResult<Json<Vec<Village>>> {
    let rows = state.db.query(REPORT_VILLAGES, &[]).await?;
    Ok(Json(rows.iter().map(Village::from_row).collect()))
}

/// Resource distribution rolled up by type
pub async fn resources_summary(
    State(state): State<SharedState>,
) -> ApiResult<Json<Vec<ResourceTypeSummary>>> {
    let rows = state.db.query(REPORT_RESOURCES_SUMMARY, &[]).await?;
    Ok(Json(rows.iter().map(ResourceTypeSummary::from_row).collect()))
}

/// Resource inventory per village
pub async fn top_resources(State(state): State<SharedState>) -> ApiResult<Json<Vec<TopResource>>> {
    let rows = state.db.query(REPORT_TOP_RESOURCES, &[]).await?;
    Ok(Json(rows.iter().map(TopResource::from_row).collect()))
}

/// Complaint counts and share by status
pub async fn complaints_status(
    State(state): State<SharedState>,
) -> ApiResult<Json<Vec<ComplaintStatusBreakdown>>> {
    let rows = state.db.query(REPORT_COMPLAINTS_STATUS, &[]).await?;
    Ok(Json(
        rows.iter().map(ComplaintStatusBreakdown::from_row).collect(),
    ))
}

/// Ten most recently filed complaints
pub async fn recent_complaints(
    State(state): State<SharedState>,
) -> ApiResult<Json<Vec<RecentComplaint>>> {
    let rows = state.db.query(REPORT_RECENT_COMPLAINTS, &[]).await?;
    Ok(Json(rows.iter().map(RecentComplaint::from_row).collect()))
}

/// Budget and completion per project, best first
pub async fn project_performance(
    State(state): State<SharedState>,
) -> ApiResult<Json<Vec<ProjectPerformance>>> {
    let rows = state.db.query(REPORT_PROJECT_PERFORMANCE, &[]).await?;
    Ok(Json(rows.iter().map(ProjectPerformance::from_row).collect()))
}

/// Work review ratings joined to project and village
pub async fn work_reviews(
    State(state): State<SharedState>,
) -> ApiResult<Json<Vec<WorkReviewSummary>>> {
    let rows = state.db.query(REPORT_WORK_REVIEWS, &[]).await?;
    Ok(Json(rows.iter().map(WorkReviewSummary::from_row).collect()))
}
