use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::model::{JobDraft, JobPosting};
use crate::AppState;

/// PUT /jobseeker/:id - replace every field except id and owner.
///
/// The owned-lookup conflates "no such record" with "someone else's record":
/// both come back as 404, so callers cannot probe which ids exist under other
/// owners.
pub async fn job_put(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(user): Extension<AuthUser>,
    Json(update): Json<JobDraft>,
) -> Result<StatusCode, ApiError> {
    let update = update.normalized();
    update.validate()?;

    let Some(existing) = state.store.find_owned(id, &user.username).await? else {
        return Err(ApiError::not_found(format!("No job posting with id {}", id)));
    };

    let replacement = JobPosting::from_draft(existing.id, existing.owner, update);

    // conditional save: the record may have been deleted since the lookup
    if !state.store.save_owned(replacement).await? {
        return Err(ApiError::not_found(format!("No job posting with id {}", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
