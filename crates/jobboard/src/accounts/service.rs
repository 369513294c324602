use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{NewUser, User, UserId};
use super::repository::UserStore;
use crate::error::{RepositoryError, Resource, ServiceError};

/// Registration and lookup of user accounts.
pub struct AccountService<U> {
    users: Arc<U>,
}

impl<U> AccountService<U>
where
    U: UserStore + 'static,
{
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    /// Register a user; emails are unique after trimming and lower-casing.
    pub fn register(&self, new_user: NewUser) -> Result<User, ServiceError> {
        new_user.validate().map_err(ServiceError::Validation)?;
        let email = new_user.normalized_email();

        if self.users.find_by_email(&email)?.is_some() {
            return Err(ServiceError::DuplicateEmail(email));
        }

        let now = Utc::now();
        let user = User {
            id: UserId::default(),
            name: new_user.name.trim().to_string(),
            email: email.clone(),
            role: new_user.role,
            created_at: now,
            updated_at: now,
        };

        match self.users.insert(user) {
            Ok(stored) => {
                info!(user_id = %stored.id, role = stored.role.label(), "user registered");
                Ok(stored)
            }
            Err(RepositoryError::Conflict) => Err(ServiceError::DuplicateEmail(email)),
            Err(other) => Err(other.into()),
        }
    }

    pub fn get(&self, user_id: &UserId) -> Result<User, ServiceError> {
        self.users
            .get(user_id)?
            .ok_or_else(|| ServiceError::NotFound(Resource::User(user_id.clone())))
    }
}
