pub mod job;

pub use job::{JobDraft, JobPosting, ValidationError};
