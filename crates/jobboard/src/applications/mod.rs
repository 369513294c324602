//! Application intake and status tracking.
//!
//! Applicants submit once per job; only the employer owning the job may read
//! the job's applications or move their status.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Application, ApplicationId, ApplicationStatus, ApplicationSubmission, Resume, ResumePayload,
};
pub use repository::{ApplicationStore, ResumeStorage, ResumeStorageError};
pub use router::application_router;
pub use service::{stored_resume_name, ApplicationService};
