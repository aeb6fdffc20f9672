use serde::Deserialize;

use crate::error::ApiError;
use crate::store::{PageRequest, SortDirection, SortKey};

mod job_delete;
mod job_get;
mod job_patch;
mod job_put;
mod jobs_get;
mod jobs_post;

pub use job_delete::job_delete;
pub use job_get::job_get;
pub use job_patch::job_patch;
pub use job_put::job_put;
pub use jobs_get::jobs_get;
pub use jobs_post::jobs_post;

/// Query parameters for the list endpoint: `?page=0&size=20&sort=id,desc`.
/// `sort` takes a wire-format field name with an optional `,asc` / `,desc`.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<usize>,
    pub size: Option<usize>,
    pub sort: Option<String>,
}

pub(crate) fn page_request(params: &ListParams) -> Result<PageRequest, ApiError> {
    let mut request = PageRequest::default();

    if let Some(page) = params.page {
        request.page = page;
    }
    if let Some(size) = params.size {
        request.size = size;
    }

    if let Some(sort) = params.sort.as_deref() {
        let (field, direction) = match sort.split_once(',') {
            Some((field, direction)) => (field, Some(direction)),
            None => (sort, None),
        };

        request.sort = SortKey::parse(field)
            .ok_or_else(|| ApiError::bad_request(format!("Unknown sort field '{}'", field)))?;

        if let Some(direction) = direction {
            request.direction = SortDirection::parse(direction).ok_or_else(|| {
                ApiError::bad_request(format!(
                    "Sort direction must be 'asc' or 'desc', got '{}'",
                    direction
                ))
            })?;
        }
    }

    Ok(request)
}
