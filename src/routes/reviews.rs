//! Work review route handlers

use crate::db::queries::INSERT_REVIEW;
use crate::error::{validation_error, ApiResult};
use crate::models::{CreateReviewRequest, MessageResponse};
use crate::state::SharedState;
use axum::{extract::State, Json};
use tracing::info;
use validator::Validate;

/// Default reviewer seeded by the schema bootstrap
const ANONYMOUS_VILLAGER_ID: i32 = 1;

/// Submit a work review for a project
pub async fn create_review(
    State(state): State<SharedState>,
    Json(payload): Json<CreateReviewRequest>,
) -> ApiResult<Json<MessageResponse>> {
    payload.validate().map_err(|e| validation_error(e.to_string()))?;

    let project_id = payload.project_id.unwrap_or(1);

    state
        .db
        .execute(
            INSERT_REVIEW,
            &[
                &project_id,
                &ANONYMOUS_VILLAGER_ID,
                &payload.quality_rating,
                &payload.review_comments,
            ],
        )
        .await?;

    info!("Review added for project {}", project_id);

    Ok(Json(MessageResponse::new(
        "Your review has been submitted successfully.",
    )))
}
