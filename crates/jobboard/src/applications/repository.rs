use super::domain::{Application, ApplicationId};
use crate::accounts::UserId;
use crate::error::RepositoryError;
use crate::jobs::JobId;

/// Storage abstraction so the lifecycle can be exercised in isolation.
///
/// Implementations should enforce uniqueness of (user, job) on `insert` and
/// answer with `RepositoryError::Conflict`; the existence check the service
/// performs beforehand is not atomic with the insert.
pub trait ApplicationStore: Send + Sync {
    fn get(&self, id: &ApplicationId) -> Result<Option<Application>, RepositoryError>;
    /// Persists a new application under a store-assigned id; the incoming id is ignored.
    fn insert(&self, application: Application) -> Result<Application, RepositoryError>;
    /// Overwrites an existing application.
    fn save(&self, application: Application) -> Result<Application, RepositoryError>;
    fn find_by_user(&self, user: &UserId) -> Result<Vec<Application>, RepositoryError>;
    fn find_by_job(&self, job: &JobId) -> Result<Vec<Application>, RepositoryError>;
    fn exists_by_user_and_job(&self, user: &UserId, job: &JobId) -> Result<bool, RepositoryError>;
    fn count(&self) -> Result<u64, RepositoryError>;
}

/// File storage backend for uploaded resumes.
pub trait ResumeStorage: Send + Sync {
    /// Writes `bytes` under `name` and returns the reference to keep on the record.
    fn store(&self, bytes: &[u8], name: &str) -> Result<String, ResumeStorageError>;
    /// Removes a previously stored resume that no record points at.
    fn discard(&self, reference: &str) -> Result<(), ResumeStorageError>;
}

/// Resume storage failure.
#[derive(Debug, thiserror::Error)]
pub enum ResumeStorageError {
    #[error("could not write resume {name}: {source}")]
    Write {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not remove resume {name}: {source}")]
    Remove {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("resume storage unavailable: {0}")]
    Unavailable(String),
}
