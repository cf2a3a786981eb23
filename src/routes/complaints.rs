//! Complaint route handlers
//!
//! Both status-update endpoints go through one validated transition over
//! the `PENDING -> IN_PROGRESS -> RESOLVED` lifecycle.

use crate::db::queries::{
    GET_COMPLAINT_STATUS, INSERT_COMPLAINT, LIST_COMPLAINTS, UPDATE_COMPLAINT_STATUS,
};
use crate::error::{not_found_error, validation_error, ApiResult, AppError};
use crate::models::{
    Complaint, ComplaintStatus, CreateComplaintRequest, MessageResponse,
    UpdateComplaintStatusRequest,
};
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;
use validator::Validate;

/// Default filer seeded by the schema bootstrap
const ANONYMOUS_VILLAGER_ID: i32 = 1;

/// List all complaints with village and villager names
pub async fn list_complaints(State(state): State<SharedState>) -> ApiResult<Json<Vec<Complaint>>> {
    let rows = state.db.query(LIST_COMPLAINTS, &[]).await?;
    let complaints = rows.iter().map(Complaint::from_row).collect();
    Ok(Json(complaints))
}

/// File a new complaint
pub async fn create_complaint(
    State(state): State<SharedState>,
    Json(payload): Json<CreateComplaintRequest>,
) -> ApiResult<Json<MessageResponse>> {
    payload.validate().map_err(|e| validation_error(e.to_string()))?;

    let village_id = payload.village_id.unwrap_or(1);

    state
        .db
        .execute(
            INSERT_COMPLAINT,
            &[
                &ANONYMOUS_VILLAGER_ID,
                &village_id,
                &payload.complaint_type,
                &payload.complaint_title,
                &payload.complaint_description,
                &payload.location,
                &payload.priority_level,
            ],
        )
        .await?;

    info!("Complaint added: {}", payload.complaint_title);

    Ok(Json(MessageResponse::new(
        "Your complaint has been filed successfully.",
    )))
}

/// Move a complaint to the status named in the request body
pub async fn update_complaint_status(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateComplaintStatusRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let target: ComplaintStatus = payload
        .status
        .parse()
        .map_err(|e: String| validation_error(e))?;

    transition_status(&state, id, target).await?;

    Ok(Json(MessageResponse::new("Complaint status updated.")))
}

/// Mark a complaint resolved
pub async fn resolve_complaint(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<MessageResponse>> {
    transition_status(&state, id, ComplaintStatus::Resolved).await?;

    Ok(Json(MessageResponse::new("Complaint marked as resolved.")))
}

/// Validated status transition shared by both update endpoints
async fn transition_status(
    state: &SharedState,
    id: i32,
    target: ComplaintStatus,
) -> Result<(), AppError> {
    let row = state
        .db
        .query_opt(GET_COMPLAINT_STATUS, &[&id])
        .await?
        .ok_or_else(|| not_found_error(format!("Complaint {} not found", id)))?;

    let current: ComplaintStatus = row
        .get::<_, String>("status")
        .parse()
        .map_err(|e: String| AppError::Internal(e))?;

    if !current.can_transition_to(target) {
        return Err(validation_error(format!(
            "Complaint {} cannot move from {} to {}",
            id, current, target
        )));
    }

    state
        .db
        .execute(UPDATE_COMPLAINT_STATUS, &[&target.as_str(), &id])
        .await?;

    info!("Complaint {} moved to {}", id, target);

    Ok(())
}
