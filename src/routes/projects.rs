//! Development project route handlers

use crate::db::queries::LIST_PROJECTS;
use crate::error::ApiResult;
use crate::models::Project;
use crate::state::SharedState;
use axum::{extract::State, Json};

/// List all development projects with their village names
pub async fn list_projects(State(state): State<SharedState>) -> ApiResult<Json<Vec<Project>>> {
    let rows = state.db.query(LIST_PROJECTS, &[]).await?;
    let projects = rows.iter().map(Project::from_row).collect();
    Ok(Json(projects))
}
