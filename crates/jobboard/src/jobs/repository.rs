use super::domain::{Job, JobId};
use crate::accounts::UserId;
use crate::error::RepositoryError;

/// Storage abstraction for job postings. Listing methods return records in the
/// store's natural iteration order.
pub trait JobStore: Send + Sync {
    fn get(&self, id: &JobId) -> Result<Option<Job>, RepositoryError>;
    /// Persists a new job under a store-assigned id; the incoming id is ignored.
    fn insert(&self, job: Job) -> Result<Job, RepositoryError>;
    /// Overwrites an existing job.
    fn save(&self, job: Job) -> Result<Job, RepositoryError>;
    fn delete(&self, id: &JobId) -> Result<(), RepositoryError>;
    fn find_by_employer(&self, employer: &UserId) -> Result<Vec<Job>, RepositoryError>;
    fn find_by_active(&self, active: bool) -> Result<Vec<Job>, RepositoryError>;
    fn find_all(&self) -> Result<Vec<Job>, RepositoryError>;
    fn count(&self) -> Result<u64, RepositoryError>;
}
