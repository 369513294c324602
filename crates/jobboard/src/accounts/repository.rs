use super::domain::{User, UserId};
use crate::error::RepositoryError;

/// Storage abstraction for user accounts.
pub trait UserStore: Send + Sync {
    fn get(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;
    /// Persists a new user under a store-assigned id; the incoming id is ignored.
    fn insert(&self, user: User) -> Result<User, RepositoryError>;
    fn delete(&self, id: &UserId) -> Result<(), RepositoryError>;
    fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    fn find_all(&self) -> Result<Vec<User>, RepositoryError>;
    fn count(&self) -> Result<u64, RepositoryError>;
}
