use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json};

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::model::JobDraft;
use crate::AppState;

/// POST /jobseeker - create a posting owned by the caller.
///
/// Any client-supplied `id` or `owner` is ignored: storage assigns the id and
/// the owner is stamped from the authenticated identity. Responds 201 with a
/// Location header pointing at the new resource.
pub async fn jobs_post(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(draft): Json<JobDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let draft = draft.normalized();
    draft.validate()?;

    let posted = state.store.insert(draft, &user.username).await?;
    tracing::debug!(id = posted.id, owner = %posted.owner, "created job posting");

    let location = format!("/jobseeker/{}", posted.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}
