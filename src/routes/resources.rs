//! Resource route handlers

use crate::db::queries::{INSERT_RESOURCE, LIST_RESOURCES};
use crate::error::{validation_error, ApiResult};
use crate::models::{CreateResourceRequest, MessageResponse, Resource};
use crate::state::SharedState;
use axum::{extract::State, Json};
use tracing::info;
use validator::Validate;

/// List all resources across villages
pub async fn list_resources(State(state): State<SharedState>) -> ApiResult<Json<Vec<Resource>>> {
    let rows = state.db.query(LIST_RESOURCES, &[]).await?;
    let resources = rows.iter().map(Resource::from_row).collect();
    Ok(Json(resources))
}

/// Record a resource for a village
pub async fn create_resource(
    State(state): State<SharedState>,
    Json(payload): Json<CreateResourceRequest>,
) -> ApiResult<Json<MessageResponse>> {
    payload.validate().map_err(|e| validation_error(e.to_string()))?;

    state
        .db
        .execute(
            INSERT_RESOURCE,
            &[
                &payload.village_id,
                &payload.resource_type,
                &payload.resource_name,
                &payload.total_count,
                &payload.coverage_percentage,
                &payload.quality_status,
            ],
        )
        .await?;

    info!("Resource added: {}", payload.resource_name);

    Ok(Json(MessageResponse::new("Resource added successfully.")))
}
