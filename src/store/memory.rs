use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::model::{JobDraft, JobPosting};

use super::{JobStore, PageRequest, SortDirection, StoreError};

/// In-process job posting store.
///
/// Stands in for an external database behind the `JobStore` seam: single-record
/// operations are atomic (one lock acquisition each), ids are assigned from a
/// monotonic sequence and never reused.
pub struct MemoryJobStore {
    records: RwLock<BTreeMap<i64, JobPosting>>,
    next_id: AtomicI64,
}

impl MemoryJobStore {
    pub fn new() -> Self {
        Self::with_start_id(1)
    }

    /// Start the id sequence at `first_id`. Handy for seeding fixtures with
    /// known identifiers.
    pub fn with_start_id(first_id: i64) -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(first_id),
        }
    }
}

impl Default for MemoryJobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn insert(&self, draft: JobDraft, owner: &str) -> Result<JobPosting, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let posting = JobPosting::from_draft(id, owner.to_string(), draft);

        let mut records = self.records.write().await;
        records.insert(id, posting.clone());
        Ok(posting)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<JobPosting>, StoreError> {
        let records = self.records.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn find_owned(&self, id: i64, owner: &str) -> Result<Option<JobPosting>, StoreError> {
        let records = self.records.read().await;
        Ok(records.get(&id).filter(|r| r.owner == owner).cloned())
    }

    async fn save_owned(&self, record: JobPosting) -> Result<bool, StoreError> {
        let mut records = self.records.write().await;
        match records.get(&record.id) {
            Some(existing) if existing.owner == record.owner => {
                records.insert(record.id, record);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_owned(&self, id: i64, owner: &str) -> Result<bool, StoreError> {
        let mut records = self.records.write().await;
        match records.get(&id) {
            Some(existing) if existing.owner == owner => {
                records.remove(&id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn list(&self, request: PageRequest) -> Result<Vec<JobPosting>, StoreError> {
        let records = self.records.read().await;
        let mut postings: Vec<JobPosting> = records.values().cloned().collect();

        postings.sort_by(|a, b| {
            let ordering = request.sort.compare(a, b);
            let ordering = match request.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            };
            // stable tie-break so pages never overlap
            ordering.then_with(|| a.id.cmp(&b.id))
        });

        let start = request.page.checked_mul(request.size).unwrap_or(usize::MAX);
        Ok(postings.into_iter().skip(start).take(request.size).collect())
    }
}
