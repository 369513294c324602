use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for users; also identifies the acting principal.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Role granted to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "EMPLOYER")]
    Employer,
    #[serde(rename = "JOBSEEKER")]
    JobSeeker,
    #[serde(rename = "ADMIN")]
    Admin,
}

impl Role {
    pub const fn label(self) -> &'static str {
        match self {
            Role::Employer => "EMPLOYER",
            Role::JobSeeker => "JOBSEEKER",
            Role::Admin => "ADMIN",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "EMPLOYER" => Some(Role::Employer),
            "JOBSEEKER" | "JOB_SEEKER" => Some(Role::JobSeeker),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// Stored user account. Credentials live with the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Registration payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl NewUser {
    pub(crate) fn normalized_email(&self) -> String {
        self.email.trim().to_ascii_lowercase()
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be blank".to_string());
        }
        let email = self.normalized_email();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(format!("'{}' is not a valid email address", self.email)),
        }
    }
}
