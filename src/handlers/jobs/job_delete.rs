use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Extension;

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::AppState;

/// DELETE /jobseeker/:id - permanently remove a posting. There is no
/// soft-delete or restore.
///
/// The owned check and the removal happen as one store operation, so a
/// non-owner gets the same 404 as a missing id and the record stays put.
pub async fn job_delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(user): Extension<AuthUser>,
) -> Result<StatusCode, ApiError> {
    if state.store.delete_owned(id, &user.username).await? {
        tracing::debug!(id, owner = %user.username, "deleted job posting");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found(format!("No job posting with id {}", id)))
    }
}
