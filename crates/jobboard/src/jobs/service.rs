use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use super::domain::{Job, JobId, JobPosting};
use super::repository::JobStore;
use super::search::{search, SearchCriteria};
use crate::access::ensure_owner;
use crate::accounts::UserId;
use crate::error::{Resource, ServiceError};

/// Job catalog: employer-owned postings plus public search.
pub struct JobService<J> {
    jobs: Arc<J>,
}

impl<J> JobService<J>
where
    J: JobStore + 'static,
{
    pub fn new(jobs: Arc<J>) -> Self {
        Self { jobs }
    }

    /// Publish a new active job owned by `employer`.
    pub fn create(&self, employer: &UserId, posting: JobPosting) -> Result<Job, ServiceError> {
        posting.validate().map_err(ServiceError::Validation)?;

        let job = Job::from_posting(posting, employer.clone(), Utc::now());
        let stored = self.jobs.insert(job)?;
        info!(job_id = %stored.id, employer_id = %employer, "job posted");
        Ok(stored)
    }

    pub fn get(&self, job_id: &JobId) -> Result<Job, ServiceError> {
        self.jobs
            .get(job_id)?
            .ok_or_else(|| ServiceError::NotFound(Resource::Job(job_id.clone())))
    }

    pub fn list_all(&self) -> Result<Vec<Job>, ServiceError> {
        Ok(self.jobs.find_all()?)
    }

    pub fn list_by_employer(&self, employer: &UserId) -> Result<Vec<Job>, ServiceError> {
        Ok(self.jobs.find_by_employer(employer)?)
    }

    /// Replace the editable fields of a job the requester owns.
    pub fn update(
        &self,
        job_id: &JobId,
        posting: JobPosting,
        requester: &UserId,
    ) -> Result<Job, ServiceError> {
        let mut job = self.get(job_id)?;
        ensure_owner(&job.employer_id, requester)?;
        posting.validate().map_err(ServiceError::Validation)?;

        job.apply_posting(posting);
        let stored = self.jobs.save(job)?;
        info!(job_id = %stored.id, "job updated");
        Ok(stored)
    }

    /// Hard-delete a job the requester owns. Its applications are left in place.
    pub fn delete(&self, job_id: &JobId, requester: &UserId) -> Result<(), ServiceError> {
        let job = self.get(job_id)?;
        ensure_owner(&job.employer_id, requester)?;

        self.jobs.delete(job_id)?;
        info!(job_id = %job_id, "job deleted");
        Ok(())
    }

    pub fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Job>, ServiceError> {
        let candidates = self.jobs.find_by_active(true)?;
        let results = search(&candidates, criteria);
        debug!(
            candidates = candidates.len(),
            matched = results.len(),
            "job search evaluated"
        );
        Ok(results)
    }
}
