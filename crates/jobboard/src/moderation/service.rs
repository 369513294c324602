use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::accounts::{Role, User, UserId, UserStore};
use crate::applications::ApplicationStore;
use crate::error::{Resource, ServiceError};
use crate::jobs::{Job, JobId, JobStore};

/// Aggregate counts for the admin dashboard. Computed on demand by full scans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_users: u64,
    pub employers: u64,
    pub job_seekers: u64,
    pub total_jobs: u64,
    pub active_jobs: u64,
    pub total_applications: u64,
}

pub struct ModerationService<U, J, A> {
    users: Arc<U>,
    jobs: Arc<J>,
    applications: Arc<A>,
}

impl<U, J, A> ModerationService<U, J, A>
where
    U: UserStore + 'static,
    J: JobStore + 'static,
    A: ApplicationStore + 'static,
{
    pub fn new(users: Arc<U>, jobs: Arc<J>, applications: Arc<A>) -> Self {
        Self {
            users,
            jobs,
            applications,
        }
    }

    pub fn list_users(&self) -> Result<Vec<User>, ServiceError> {
        Ok(self.users.find_all()?)
    }

    /// Set a job's visibility, whoever owns it.
    pub fn moderate_job(&self, job_id: &JobId, active: bool) -> Result<Job, ServiceError> {
        let mut job = self
            .jobs
            .get(job_id)?
            .ok_or_else(|| ServiceError::NotFound(Resource::Job(job_id.clone())))?;

        job.active = active;
        let stored = self.jobs.save(job)?;
        info!(job_id = %stored.id, active, "job moderated");
        Ok(stored)
    }

    /// Delete the user record. Their jobs and applications are kept and keep
    /// pointing at the deleted id.
    pub fn ban_user(&self, user_id: &UserId) -> Result<(), ServiceError> {
        if self.users.get(user_id)?.is_none() {
            return Err(ServiceError::NotFound(Resource::User(user_id.clone())));
        }

        self.users.delete(user_id)?;

        let orphaned_jobs = self.jobs.find_by_employer(user_id)?.len();
        let orphaned_applications = self.applications.find_by_user(user_id)?.len();
        warn!(
            user_id = %user_id,
            orphaned_jobs,
            orphaned_applications,
            "user banned; owned records left in place"
        );
        Ok(())
    }

    pub fn statistics(&self) -> Result<Statistics, ServiceError> {
        let users = self.users.find_all()?;
        let employers = users.iter().filter(|user| user.role == Role::Employer).count() as u64;
        let job_seekers = users
            .iter()
            .filter(|user| user.role == Role::JobSeeker)
            .count() as u64;

        Ok(Statistics {
            total_users: self.users.count()?,
            employers,
            job_seekers,
            total_jobs: self.jobs.count()?,
            active_jobs: self.jobs.find_by_active(true)?.len() as u64,
            total_applications: self.applications.count()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::accounts::{AccountService, NewUser};
    use crate::applications::{Application, ApplicationId, ApplicationStatus, Resume};
    use crate::error::FailureKind;
    use crate::jobs::{JobPosting, JobType};
    use crate::memory::{InMemoryApplicationStore, InMemoryJobStore, InMemoryUserStore};

    struct Harness {
        service: ModerationService<InMemoryUserStore, InMemoryJobStore, InMemoryApplicationStore>,
        accounts: AccountService<InMemoryUserStore>,
        jobs: Arc<InMemoryJobStore>,
        applications: Arc<InMemoryApplicationStore>,
    }

    fn harness() -> Harness {
        let users = Arc::new(InMemoryUserStore::default());
        let jobs = Arc::new(InMemoryJobStore::default());
        let applications = Arc::new(InMemoryApplicationStore::default());
        Harness {
            service: ModerationService::new(users.clone(), jobs.clone(), applications.clone()),
            accounts: AccountService::new(users),
            jobs,
            applications,
        }
    }

    fn register(harness: &Harness, email: &str, role: Role) -> User {
        harness
            .accounts
            .register(NewUser {
                name: "Casey".to_string(),
                email: email.to_string(),
                role,
            })
            .expect("registered")
    }

    fn post_job(harness: &Harness, employer: &UserId) -> Job {
        let posting = JobPosting {
            title: "Support Engineer".to_string(),
            company: "Fabrikam".to_string(),
            location: "Dublin".to_string(),
            job_type: JobType::PartTime,
            description: "Help customers".to_string(),
            salary: None,
            requirements: Vec::new(),
            experience_level: None,
            remote: false,
            category: None,
            deadline: None,
        };
        harness
            .jobs
            .insert(Job::from_posting(posting, employer.clone(), Utc::now()))
            .expect("job inserted")
    }

    fn apply(harness: &Harness, user: &UserId, job: &JobId) -> Application {
        let now = Utc::now();
        harness
            .applications
            .insert(Application {
                id: ApplicationId::default(),
                job_id: job.clone(),
                user_id: user.clone(),
                status: ApplicationStatus::Pending,
                resume: Resume::Inline {
                    encoded: "cv".to_string(),
                },
                cover_letter: None,
                applied_date: now,
                last_updated: now,
            })
            .expect("application inserted")
    }

    #[test]
    fn statistics_count_roles_jobs_and_applications() {
        let harness = harness();
        let employer = register(&harness, "boss@example.com", Role::Employer);
        let seeker = register(&harness, "seeker@example.com", Role::JobSeeker);
        register(&harness, "root@example.com", Role::Admin);

        let open = post_job(&harness, &employer.id);
        let closed = post_job(&harness, &employer.id);
        harness
            .service
            .moderate_job(&closed.id, false)
            .expect("deactivated");
        apply(&harness, &seeker.id, &open.id);

        assert_eq!(
            harness.service.statistics().expect("statistics"),
            Statistics {
                total_users: 3,
                employers: 1,
                job_seekers: 1,
                total_jobs: 2,
                active_jobs: 1,
                total_applications: 1,
            }
        );
    }

    #[test]
    fn moderation_ignores_ownership_and_can_reactivate() {
        let harness = harness();
        let job = post_job(&harness, &UserId::from("emp-9"));

        let hidden = harness
            .service
            .moderate_job(&job.id, false)
            .expect("deactivated");
        assert!(!hidden.active);

        let restored = harness
            .service
            .moderate_job(&job.id, true)
            .expect("reactivated");
        assert!(restored.active);
        assert_eq!(restored.employer_id, job.employer_id);

        let missing = harness
            .service
            .moderate_job(&JobId::from("job-404"), false)
            .expect_err("missing job");
        assert_eq!(missing.kind(), FailureKind::NotFound);
    }

    #[test]
    fn ban_removes_user_but_keeps_their_records() {
        let harness = harness();
        let employer = register(&harness, "boss@example.com", Role::Employer);
        let seeker = register(&harness, "seeker@example.com", Role::JobSeeker);
        let job = post_job(&harness, &employer.id);
        apply(&harness, &seeker.id, &job.id);

        harness.service.ban_user(&employer.id).expect("banned");

        let remaining: Vec<UserId> = harness
            .service
            .list_users()
            .expect("listed")
            .into_iter()
            .map(|user| user.id)
            .collect();
        assert_eq!(remaining, vec![seeker.id.clone()]);
        assert_eq!(harness.jobs.count().expect("count"), 1);
        assert_eq!(harness.applications.count().expect("count"), 1);

        let again = harness
            .service
            .ban_user(&employer.id)
            .expect_err("already banned");
        assert!(matches!(again, ServiceError::NotFound(Resource::User(_))));
    }
}
