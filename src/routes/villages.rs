//! Village route handlers

use crate::db::queries::{
    contains_pattern, GET_VILLAGE, INSERT_VILLAGE, LIST_VILLAGES, SEARCH_VILLAGES,
    VILLAGE_COMPLAINTS, VILLAGE_PROJECTS, VILLAGE_RESOURCES,
};
use crate::error::{not_found_error, validation_error, ApiResult};
use crate::models::{
    Complaint, CreateVillageRequest, MessageResponse, Project, Resource, Village, VillageDetail,
};
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{debug, info};
use validator::Validate;

/// List all villages
pub async fn list_villages(State(state): State<SharedState>) -> ApiResult<Json<Vec<Village>>> {
    let rows = state.db.query(LIST_VILLAGES, &[]).await?;
    let villages = rows.iter().map(Village::from_row).collect();
    Ok(Json(villages))
}

/// Full profile for one village: resources, complaints, and projects
pub async fn get_village(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<VillageDetail>> {
    debug!("Fetching village profile: {}", id);

    let village = state
        .db
        .query_opt(GET_VILLAGE, &[&id])
        .await?
        .map(|row| Village::from_row(&row))
        .ok_or_else(|| not_found_error(format!("Village {} not found", id)))?;

    let resources = state
        .db
        .query(VILLAGE_RESOURCES, &[&id])
        .await?
        .iter()
        .map(Resource::from_row)
        .collect();

    let complaints = state
        .db
        .query(VILLAGE_COMPLAINTS, &[&id])
        .await?
        .iter()
        .map(Complaint::from_row)
        .collect();

    let projects = state
        .db
        .query(VILLAGE_PROJECTS, &[&id])
        .await?
        .iter()
        .map(Project::from_row)
        .collect();

    Ok(Json(VillageDetail {
        village,
        resources,
        complaints,
        projects,
    }))
}

/// Search villages by name or code substring
pub async fn search_villages(
    State(state): State<SharedState>,
    Path(query): Path<String>,
) -> ApiResult<Json<Vec<Village>>> {
    let pattern = contains_pattern(&query);
    let rows = state.db.query(SEARCH_VILLAGES, &[&pattern]).await?;
    let villages: Vec<Village> = rows.iter().map(Village::from_row).collect();

    debug!("Village search '{}' matched {} rows", query, villages.len());

    Ok(Json(villages))
}

/// Register a new village
pub async fn create_village(
    State(state): State<SharedState>,
    Json(payload): Json<CreateVillageRequest>,
) -> ApiResult<Json<MessageResponse>> {
    payload.validate().map_err(|e| validation_error(e.to_string()))?;

    state
        .db
        .execute(
            INSERT_VILLAGE,
            &[
                &payload.village_name,
                &payload.village_code,
                &payload.population,
                &payload.total_families,
            ],
        )
        .await?;

    info!("Village added: {}", payload.village_name);

    Ok(Json(MessageResponse::new("Village added successfully.")))
}
