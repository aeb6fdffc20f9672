use axum::extract::{Path, State};
use axum::Json;

use crate::error::ApiError;
use crate::model::JobPosting;
use crate::AppState;

/// GET /jobseeker/:id - fetch a single posting.
///
/// Reads carry no ownership restriction; 404 only when the id does not exist.
pub async fn job_get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<JobPosting>, ApiError> {
    match state.store.find_by_id(id).await? {
        Some(posting) => Ok(Json(posting)),
        None => Err(ApiError::not_found(format!("No job posting with id {}", id))),
    }
}
