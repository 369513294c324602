use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::Utc;
use serde_json::Value;

use crate::accounts::UserId;
use crate::applications::domain::{Application, ApplicationId, ApplicationSubmission, ResumePayload};
use crate::applications::repository::{ApplicationStore, ResumeStorage, ResumeStorageError};
use crate::applications::service::ApplicationService;
use crate::config::IntakeConfig;
use crate::error::RepositoryError;
use crate::jobs::{Job, JobId, JobPosting, JobStore, JobType};
use crate::memory::{InMemoryApplicationStore, InMemoryJobStore};

pub(super) const EMPLOYER: &str = "emp-1";
pub(super) const OTHER_EMPLOYER: &str = "emp-2";
pub(super) const APPLICANT: &str = "seeker-1";

pub(super) type TestService =
    ApplicationService<InMemoryJobStore, InMemoryApplicationStore, MemoryResumes>;

pub(super) fn posting() -> JobPosting {
    JobPosting {
        title: "Platform Engineer".to_string(),
        company: "Northwind".to_string(),
        location: "Remote, EU".to_string(),
        job_type: JobType::FullTime,
        description: "Own the deployment pipeline".to_string(),
        salary: Some("$80k-$100k".to_string()),
        requirements: vec!["Kubernetes".to_string(), "Rust".to_string()],
        experience_level: Some("MID".to_string()),
        remote: true,
        category: Some("Engineering".to_string()),
        deadline: None,
    }
}

pub(super) fn seed_job(jobs: &InMemoryJobStore, employer: &str) -> Job {
    jobs.insert(Job::from_posting(
        posting(),
        UserId::from(employer),
        Utc::now(),
    ))
    .expect("job inserted")
}

pub(super) fn inline_submission(job_id: &JobId) -> ApplicationSubmission {
    ApplicationSubmission {
        job_id: job_id.clone(),
        resume: ResumePayload::Inline("JVBERi0xLjQKJcfs".to_string()),
        cover_letter: Some("I would love to join.".to_string()),
    }
}

pub(super) fn upload_submission(job_id: &JobId, file_name: &str) -> ApplicationSubmission {
    ApplicationSubmission {
        job_id: job_id.clone(),
        resume: ResumePayload::Upload {
            file_name: file_name.to_string(),
            bytes: b"%PDF-1.4 resume".to_vec(),
        },
        cover_letter: None,
    }
}

pub(super) struct Fixture {
    pub(super) service: TestService,
    pub(super) jobs: Arc<InMemoryJobStore>,
    pub(super) applications: Arc<InMemoryApplicationStore>,
    pub(super) resumes: Arc<MemoryResumes>,
}

pub(super) fn fixture() -> Fixture {
    fixture_with(IntakeConfig::default())
}

pub(super) fn fixture_with(intake: IntakeConfig) -> Fixture {
    let jobs = Arc::new(InMemoryJobStore::default());
    let applications = Arc::new(InMemoryApplicationStore::default());
    let resumes = Arc::new(MemoryResumes::default());
    let service = ApplicationService::new(
        jobs.clone(),
        applications.clone(),
        resumes.clone(),
        intake,
    );
    Fixture {
        service,
        jobs,
        applications,
        resumes,
    }
}

#[derive(Default)]
pub(super) struct MemoryResumes {
    files: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemoryResumes {
    pub(super) fn names(&self) -> Vec<String> {
        self.files
            .lock()
            .expect("resume mutex poisoned")
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }
}

impl ResumeStorage for MemoryResumes {
    fn store(&self, bytes: &[u8], name: &str) -> Result<String, ResumeStorageError> {
        self.files
            .lock()
            .expect("resume mutex poisoned")
            .push((name.to_string(), bytes.to_vec()));
        Ok(name.to_string())
    }

    fn discard(&self, reference: &str) -> Result<(), ResumeStorageError> {
        self.files
            .lock()
            .expect("resume mutex poisoned")
            .retain(|(name, _)| name != reference);
        Ok(())
    }
}

pub(super) struct FailingResumes;

impl ResumeStorage for FailingResumes {
    fn store(&self, _bytes: &[u8], name: &str) -> Result<String, ResumeStorageError> {
        Err(ResumeStorageError::Write {
            name: name.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only volume"),
        })
    }

    fn discard(&self, reference: &str) -> Result<(), ResumeStorageError> {
        Err(ResumeStorageError::Remove {
            name: reference.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only volume"),
        })
    }
}

/// Store whose existence check always misses, mimicking a concurrent
/// submission that slipped in between check and insert.
#[derive(Default)]
pub(super) struct RacyApplicationStore {
    pub(super) inner: InMemoryApplicationStore,
}

impl ApplicationStore for RacyApplicationStore {
    fn get(&self, id: &ApplicationId) -> Result<Option<Application>, RepositoryError> {
        self.inner.get(id)
    }

    fn insert(&self, application: Application) -> Result<Application, RepositoryError> {
        self.inner.insert(application)
    }

    fn save(&self, application: Application) -> Result<Application, RepositoryError> {
        self.inner.save(application)
    }

    fn find_by_user(&self, user: &UserId) -> Result<Vec<Application>, RepositoryError> {
        self.inner.find_by_user(user)
    }

    fn find_by_job(&self, job: &JobId) -> Result<Vec<Application>, RepositoryError> {
        self.inner.find_by_job(job)
    }

    fn exists_by_user_and_job(
        &self,
        _user: &UserId,
        _job: &JobId,
    ) -> Result<bool, RepositoryError> {
        Ok(false)
    }

    fn count(&self) -> Result<u64, RepositoryError> {
        self.inner.count()
    }
}

pub(super) struct UnavailableApplicationStore;

impl ApplicationStore for UnavailableApplicationStore {
    fn get(&self, _id: &ApplicationId) -> Result<Option<Application>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn insert(&self, _application: Application) -> Result<Application, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn save(&self, _application: Application) -> Result<Application, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn find_by_user(&self, _user: &UserId) -> Result<Vec<Application>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn find_by_job(&self, _job: &JobId) -> Result<Vec<Application>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn exists_by_user_and_job(
        &self,
        _user: &UserId,
        _job: &JobId,
    ) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn count(&self) -> Result<u64, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
