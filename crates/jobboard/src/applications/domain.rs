use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::accounts::UserId;
use crate::jobs::JobId;

/// Identifier wrapper for submitted applications.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub String);

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ApplicationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Review status set by the owning employer.
///
/// Transitions are not policed: any label the employer sends is stored as-is,
/// with unrecognised labels preserved in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApplicationStatus {
    Pending,
    Reviewed,
    Rejected,
    Interview,
    Hired,
    Other(String),
}

impl ApplicationStatus {
    pub fn label(&self) -> &str {
        match self {
            ApplicationStatus::Pending => "PENDING",
            ApplicationStatus::Reviewed => "REVIEWED",
            ApplicationStatus::Rejected => "REJECTED",
            ApplicationStatus::Interview => "INTERVIEW",
            ApplicationStatus::Hired => "HIRED",
            ApplicationStatus::Other(label) => label,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ApplicationStatus::Rejected | ApplicationStatus::Hired)
    }
}

impl From<String> for ApplicationStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PENDING" => ApplicationStatus::Pending,
            "REVIEWED" => ApplicationStatus::Reviewed,
            "REJECTED" => ApplicationStatus::Rejected,
            "INTERVIEW" => ApplicationStatus::Interview,
            "HIRED" => ApplicationStatus::Hired,
            _ => ApplicationStatus::Other(value),
        }
    }
}

impl From<&str> for ApplicationStatus {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<ApplicationStatus> for String {
    fn from(value: ApplicationStatus) -> Self {
        match value {
            ApplicationStatus::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Resume as kept on the application record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resume {
    /// Reference returned by the resume storage backend.
    Stored { reference: String },
    /// Encoded document carried on the record itself.
    Inline { encoded: String },
}

/// Resume as submitted by the applicant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumePayload {
    Upload { file_name: String, bytes: Vec<u8> },
    Inline(String),
}

impl ResumePayload {
    pub fn is_empty(&self) -> bool {
        match self {
            ResumePayload::Upload { bytes, .. } => bytes.is_empty(),
            ResumePayload::Inline(encoded) => encoded.trim().is_empty(),
        }
    }
}

/// Everything an applicant sends besides their identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationSubmission {
    pub job_id: JobId,
    pub resume: ResumePayload,
    pub cover_letter: Option<String>,
}

/// Stored application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub user_id: UserId,
    pub status: ApplicationStatus,
    pub resume: Resume,
    pub cover_letter: Option<String>,
    pub applied_date: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}
