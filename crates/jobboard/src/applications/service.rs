use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::domain::{
    Application, ApplicationId, ApplicationStatus, ApplicationSubmission, Resume, ResumePayload,
};
use super::repository::{ApplicationStore, ResumeStorage};
use crate::access::ensure_owner;
use crate::accounts::UserId;
use crate::config::IntakeConfig;
use crate::error::{RepositoryError, Resource, ServiceError};
use crate::jobs::{Job, JobId, JobStore};

/// Service composing the job store, application store, and resume storage.
pub struct ApplicationService<J, A, F> {
    jobs: Arc<J>,
    applications: Arc<A>,
    resumes: Arc<F>,
    intake: IntakeConfig,
}

impl<J, A, F> ApplicationService<J, A, F>
where
    J: JobStore + 'static,
    A: ApplicationStore + 'static,
    F: ResumeStorage + 'static,
{
    pub fn new(jobs: Arc<J>, applications: Arc<A>, resumes: Arc<F>, intake: IntakeConfig) -> Self {
        Self {
            jobs,
            applications,
            resumes,
            intake,
        }
    }

    /// Submit a new application on behalf of `applicant`.
    pub fn submit(
        &self,
        applicant: &UserId,
        submission: ApplicationSubmission,
    ) -> Result<Application, ServiceError> {
        let ApplicationSubmission {
            job_id,
            resume,
            cover_letter,
        } = submission;

        let job = self.require_job(&job_id)?;
        if !job.active && !self.intake.accept_inactive_jobs {
            return Err(ServiceError::JobInactive(job_id));
        }

        if resume.is_empty() {
            return Err(ServiceError::Validation("resume must not be empty".to_string()));
        }

        if self.applications.exists_by_user_and_job(applicant, &job_id)? {
            return Err(ServiceError::DuplicateApplication {
                user_id: applicant.clone(),
                job_id,
            });
        }

        let resume = match resume {
            ResumePayload::Upload { file_name, bytes } => {
                let name = stored_resume_name(&file_name);
                let reference = self.resumes.store(&bytes, &name)?;
                Resume::Stored { reference }
            }
            ResumePayload::Inline(encoded) => Resume::Inline { encoded },
        };

        let now = Utc::now();
        let application = Application {
            id: ApplicationId::default(),
            job_id: job_id.clone(),
            user_id: applicant.clone(),
            status: ApplicationStatus::Pending,
            resume,
            cover_letter,
            applied_date: now,
            last_updated: now,
        };

        let stored_reference = match &application.resume {
            Resume::Stored { reference } => Some(reference.clone()),
            Resume::Inline { .. } => None,
        };

        let inserted = self.applications.insert(application);
        if inserted.is_err() {
            if let Some(reference) = stored_reference {
                self.discard_orphan(&reference);
            }
        }

        match inserted {
            Ok(stored) => {
                info!(
                    application_id = %stored.id,
                    job_id = %stored.job_id,
                    user_id = %stored.user_id,
                    "application submitted"
                );
                Ok(stored)
            }
            Err(RepositoryError::Conflict) => {
                warn!(
                    job_id = %job_id,
                    user_id = %applicant,
                    "concurrent duplicate application rejected by store"
                );
                Err(ServiceError::DuplicateApplication {
                    user_id: applicant.clone(),
                    job_id,
                })
            }
            Err(other) => Err(other.into()),
        }
    }

    /// Every application the applicant has submitted.
    pub fn list_by_applicant(&self, applicant: &UserId) -> Result<Vec<Application>, ServiceError> {
        Ok(self.applications.find_by_user(applicant)?)
    }

    /// Applications for a job, visible only to the employer owning it.
    pub fn list_by_job(
        &self,
        job_id: &JobId,
        requester: &UserId,
    ) -> Result<Vec<Application>, ServiceError> {
        let job = self.require_job(job_id)?;
        ensure_owner(&job.employer_id, requester)?;
        Ok(self.applications.find_by_job(job_id)?)
    }

    /// Write `status` verbatim and refresh `last_updated`.
    pub fn update_status(
        &self,
        application_id: &ApplicationId,
        status: ApplicationStatus,
        requester: &UserId,
    ) -> Result<Application, ServiceError> {
        let mut application = self
            .applications
            .get(application_id)?
            .ok_or_else(|| ServiceError::NotFound(Resource::Application(application_id.clone())))?;

        let job = self.jobs.get(&application.job_id)?.ok_or_else(|| {
            error!(
                application_id = %application.id,
                job_id = %application.job_id,
                "application references a job that no longer exists"
            );
            ServiceError::NotFound(Resource::Job(application.job_id.clone()))
        })?;
        ensure_owner(&job.employer_id, requester)?;

        let previous = std::mem::replace(&mut application.status, status);
        application.last_updated = Utc::now().max(application.last_updated);

        let stored = self.applications.save(application)?;
        info!(
            application_id = %stored.id,
            from = %previous,
            to = %stored.status,
            "application status changed"
        );
        Ok(stored)
    }

    fn discard_orphan(&self, reference: &str) {
        if let Err(err) = self.resumes.discard(reference) {
            warn!(reference, error = %err, "could not discard resume of rejected application");
        }
    }

    fn require_job(&self, job_id: &JobId) -> Result<Job, ServiceError> {
        self.jobs
            .get(job_id)?
            .ok_or_else(|| ServiceError::NotFound(Resource::Job(job_id.clone())))
    }
}

/// Collision-free storage name: a random UUID prefix followed by the original
/// file name with any directory components removed.
pub fn stored_resume_name(original: &str) -> String {
    let base = original
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .map(str::trim)
        .filter(|name| !name.is_empty() && *name != "." && *name != "..")
        .unwrap_or("resume");
    format!("{}_{}", Uuid::new_v4(), base)
}
