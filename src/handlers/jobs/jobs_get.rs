use axum::extract::{Query, State};
use axum::Json;

use crate::error::ApiError;
use crate::model::JobPosting;
use crate::AppState;

use super::{page_request, ListParams};

/// GET /jobseeker - page through job postings.
///
/// Default sort is id ascending. Listings are visible to every authenticated
/// caller; there is no ownership filtering on reads.
pub async fn jobs_get(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<JobPosting>>, ApiError> {
    let request = page_request(&params)?;
    let postings = state.store.list(request).await?;
    Ok(Json(postings))
}
