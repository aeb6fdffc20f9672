use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use json_patch::Patch;

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::model::JobPosting;
use crate::AppState;

/// PATCH /jobseeker/:id - apply an RFC 6902 patch document
/// (`application/json-patch+json`) to the stored record.
///
/// Operations run in document order against the record's field tree. The id
/// and owner fields cannot be changed through a patch; they are re-asserted
/// after application. A patch that cannot be applied, or whose result is not
/// a valid posting, is a 400.
pub async fn job_patch(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(user): Extension<AuthUser>,
    Json(patch): Json<Patch>,
) -> Result<StatusCode, ApiError> {
    let Some(existing) = state.store.find_owned(id, &user.username).await? else {
        return Err(ApiError::not_found(format!("No job posting with id {}", id)));
    };

    let patched = apply_patch(&existing, &patch)?;

    if !state.store.save_owned(patched).await? {
        return Err(ApiError::not_found(format!("No job posting with id {}", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn apply_patch(existing: &JobPosting, patch: &Patch) -> Result<JobPosting, ApiError> {
    let mut doc = serde_json::to_value(existing).map_err(|e| {
        tracing::error!("failed to serialize job posting {}: {}", existing.id, e);
        ApiError::internal_server_error("Failed to apply patch")
    })?;

    json_patch::patch(&mut doc, patch)
        .map_err(|e| ApiError::bad_request(format!("Patch could not be applied: {}", e)))?;

    let mut patched: JobPosting = serde_json::from_value(doc).map_err(|e| {
        ApiError::bad_request(format!("Patched document is not a valid job posting: {}", e))
    })?;

    // id and owner are immutable regardless of what the patch did to them
    patched.id = existing.id;
    patched.owner = existing.owner.clone();
    patched.normalize();
    patched.validate()?;

    Ok(patched)
}
