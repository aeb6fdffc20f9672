use std::cmp::Ordering;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{JobDraft, JobPosting};

pub mod memory;

pub use memory::MemoryJobStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Fields a listing can be sorted on, keyed by wire-format name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Title,
    Company,
    PostDate,
    CloseDate,
    Location,
    Duration,
    EmploymentType,
    MonthlyPay,
}

impl SortKey {
    pub fn parse(field: &str) -> Option<Self> {
        match field {
            "id" => Some(SortKey::Id),
            "title" => Some(SortKey::Title),
            "company" => Some(SortKey::Company),
            "postDate" => Some(SortKey::PostDate),
            "closeDate" => Some(SortKey::CloseDate),
            "location" => Some(SortKey::Location),
            "duration" => Some(SortKey::Duration),
            "employmentType" => Some(SortKey::EmploymentType),
            "monthlyPay" => Some(SortKey::MonthlyPay),
            _ => None,
        }
    }

    /// Ascending comparison on this key. Postings without a close date sort
    /// after ones that have one.
    pub fn compare(&self, a: &JobPosting, b: &JobPosting) -> Ordering {
        match self {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Title => a.title.cmp(&b.title),
            SortKey::Company => a.company.cmp(&b.company),
            SortKey::PostDate => a.post_date.cmp(&b.post_date),
            SortKey::CloseDate => match (a.close_date, b.close_date) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            SortKey::Location => a.location.cmp(&b.location),
            SortKey::Duration => a.duration.cmp(&b.duration),
            SortKey::EmploymentType => a.employment_type.cmp(&b.employment_type),
            SortKey::MonthlyPay => a.monthly_pay.cmp(&b.monthly_pay),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn parse(direction: &str) -> Option<Self> {
        match direction {
            "asc" => Some(SortDirection::Ascending),
            "desc" => Some(SortDirection::Descending),
            _ => None,
        }
    }
}

/// A page of results to fetch: 0-based page index, page size, sort key and
/// direction. Defaults match the list endpoint: first page of 20, id ascending.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
    pub sort: SortKey,
    pub direction: SortDirection,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: 20,
            sort: SortKey::Id,
            direction: SortDirection::Ascending,
        }
    }
}

/// The storage collaborator for job postings.
///
/// The owned variants combine the existence check and the ownership check in a
/// single operation, so a caller can never distinguish "no such record" from
/// "someone else's record". `save_owned` and `delete_owned` additionally
/// perform their check and write atomically, which closes the window between a
/// handler's lookup and its save.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Persist a new posting. Storage assigns the id; `owner` is stamped from
    /// the authenticated caller.
    async fn insert(&self, draft: JobDraft, owner: &str) -> Result<JobPosting, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<JobPosting>, StoreError>;

    /// Owned-lookup: present only when the record exists *and* belongs to
    /// `owner`.
    async fn find_owned(&self, id: i64, owner: &str) -> Result<Option<JobPosting>, StoreError>;

    /// Conditional replace: writes only while a record with the same id and
    /// owner still exists. Returns false once it is gone or has changed hands.
    async fn save_owned(&self, record: JobPosting) -> Result<bool, StoreError>;

    /// Conditional hard delete: removes the record only when it exists and
    /// belongs to `owner`.
    async fn delete_owned(&self, id: i64, owner: &str) -> Result<bool, StoreError>;

    async fn list(&self, request: PageRequest) -> Result<Vec<JobPosting>, StoreError>;
}
