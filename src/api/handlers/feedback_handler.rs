use axum::{Json, extract::State, response::IntoResponse};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::feedback_dto::*},
    error::AppError,
};

pub async fn feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!(is_valid = request.is_valid, "Feedback received");

    state.metrics.record_feedback(request.is_valid);
    state.feedback_service.record(request.into()).await?;

    Ok(Json(FeedbackAck { ok: true }))
}
