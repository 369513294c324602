//! In-process stores backing the demo server and tests.
//!
//! Records live in ordered maps keyed by zero-padded sequential ids, so
//! iteration order is insertion order.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::accounts::{User, UserId, UserStore};
use crate::applications::{Application, ApplicationId, ApplicationStore};
use crate::error::RepositoryError;
use crate::jobs::{Job, JobId, JobStore};

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, RepositoryError> {
    mutex
        .lock()
        .map_err(|_| RepositoryError::Unavailable("store mutex poisoned".to_string()))
}

#[derive(Debug, Default)]
struct Sequence(AtomicU64);

impl Sequence {
    fn next(&self, prefix: &str) -> String {
        let id = self.0.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{prefix}-{id:06}")
    }
}

#[derive(Debug, Default)]
pub struct InMemoryJobStore {
    records: Mutex<BTreeMap<JobId, Job>>,
    sequence: Sequence,
}

impl JobStore for InMemoryJobStore {
    fn get(&self, id: &JobId) -> Result<Option<Job>, RepositoryError> {
        Ok(lock(&self.records)?.get(id).cloned())
    }

    fn insert(&self, mut job: Job) -> Result<Job, RepositoryError> {
        job.id = JobId(self.sequence.next("job"));
        lock(&self.records)?.insert(job.id.clone(), job.clone());
        Ok(job)
    }

    fn save(&self, job: Job) -> Result<Job, RepositoryError> {
        let mut records = lock(&self.records)?;
        match records.get_mut(&job.id) {
            Some(slot) => {
                *slot = job.clone();
                Ok(job)
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn delete(&self, id: &JobId) -> Result<(), RepositoryError> {
        lock(&self.records)?
            .remove(id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }

    fn find_by_employer(&self, employer: &UserId) -> Result<Vec<Job>, RepositoryError> {
        Ok(lock(&self.records)?
            .values()
            .filter(|job| &job.employer_id == employer)
            .cloned()
            .collect())
    }

    fn find_by_active(&self, active: bool) -> Result<Vec<Job>, RepositoryError> {
        Ok(lock(&self.records)?
            .values()
            .filter(|job| job.active == active)
            .cloned()
            .collect())
    }

    fn find_all(&self) -> Result<Vec<Job>, RepositoryError> {
        Ok(lock(&self.records)?.values().cloned().collect())
    }

    fn count(&self) -> Result<u64, RepositoryError> {
        Ok(lock(&self.records)?.len() as u64)
    }
}

/// Application store with a unique (user, job) index checked on insert.
#[derive(Debug, Default)]
pub struct InMemoryApplicationStore {
    records: Mutex<BTreeMap<ApplicationId, Application>>,
    sequence: Sequence,
}

impl ApplicationStore for InMemoryApplicationStore {
    fn get(&self, id: &ApplicationId) -> Result<Option<Application>, RepositoryError> {
        Ok(lock(&self.records)?.get(id).cloned())
    }

    fn insert(&self, mut application: Application) -> Result<Application, RepositoryError> {
        let mut records = lock(&self.records)?;
        let duplicate = records.values().any(|existing| {
            existing.user_id == application.user_id && existing.job_id == application.job_id
        });
        if duplicate {
            return Err(RepositoryError::Conflict);
        }

        application.id = ApplicationId(self.sequence.next("app"));
        records.insert(application.id.clone(), application.clone());
        Ok(application)
    }

    fn save(&self, application: Application) -> Result<Application, RepositoryError> {
        let mut records = lock(&self.records)?;
        match records.get_mut(&application.id) {
            Some(slot) => {
                *slot = application.clone();
                Ok(application)
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn find_by_user(&self, user: &UserId) -> Result<Vec<Application>, RepositoryError> {
        Ok(lock(&self.records)?
            .values()
            .filter(|application| &application.user_id == user)
            .cloned()
            .collect())
    }

    fn find_by_job(&self, job: &JobId) -> Result<Vec<Application>, RepositoryError> {
        Ok(lock(&self.records)?
            .values()
            .filter(|application| &application.job_id == job)
            .cloned()
            .collect())
    }

    fn exists_by_user_and_job(&self, user: &UserId, job: &JobId) -> Result<bool, RepositoryError> {
        Ok(lock(&self.records)?
            .values()
            .any(|application| &application.user_id == user && &application.job_id == job))
    }

    fn count(&self) -> Result<u64, RepositoryError> {
        Ok(lock(&self.records)?.len() as u64)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    records: Mutex<BTreeMap<UserId, User>>,
    sequence: Sequence,
}

impl UserStore for InMemoryUserStore {
    fn get(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        Ok(lock(&self.records)?.get(id).cloned())
    }

    fn insert(&self, mut user: User) -> Result<User, RepositoryError> {
        let mut records = lock(&self.records)?;
        if records.values().any(|existing| existing.email == user.email) {
            return Err(RepositoryError::Conflict);
        }

        user.id = UserId(self.sequence.next("user"));
        records.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    fn delete(&self, id: &UserId) -> Result<(), RepositoryError> {
        lock(&self.records)?
            .remove(id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(lock(&self.records)?
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(lock(&self.records)?.values().cloned().collect())
    }

    fn count(&self) -> Result<u64, RepositoryError> {
        Ok(lock(&self.records)?.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applications::{ApplicationStatus, Resume};
    use chrono::Utc;

    fn application(user: &str, job: &str) -> Application {
        let now = Utc::now();
        Application {
            id: ApplicationId::default(),
            job_id: JobId::from(job),
            user_id: UserId::from(user),
            status: ApplicationStatus::Pending,
            resume: Resume::Inline {
                encoded: "cv".to_string(),
            },
            cover_letter: None,
            applied_date: now,
            last_updated: now,
        }
    }

    #[test]
    fn application_insert_enforces_unique_pair() {
        let store = InMemoryApplicationStore::default();
        let first = store.insert(application("u1", "j1")).expect("first insert");
        assert_eq!(first.id.0, "app-000001");

        assert!(matches!(
            store.insert(application("u1", "j1")),
            Err(RepositoryError::Conflict)
        ));
        store
            .insert(application("u1", "j2"))
            .expect("other job is fine");
        assert_eq!(store.count().expect("count"), 2);
    }

    #[test]
    fn save_requires_existing_record() {
        let store = InMemoryApplicationStore::default();
        let mut missing = application("u1", "j1");
        missing.id = ApplicationId::from("app-999999");
        assert!(matches!(store.save(missing), Err(RepositoryError::NotFound)));
    }

    #[test]
    fn ids_preserve_insertion_order_past_nine() {
        let store = InMemoryApplicationStore::default();
        for job in 0..12 {
            store
                .insert(application("u1", &format!("j{job}")))
                .expect("insert");
        }
        let jobs: Vec<String> = store
            .find_by_user(&UserId::from("u1"))
            .expect("list")
            .into_iter()
            .map(|application| application.job_id.0)
            .collect();
        let expected: Vec<String> = (0..12).map(|job| format!("j{job}")).collect();
        assert_eq!(jobs, expected);
    }
}
