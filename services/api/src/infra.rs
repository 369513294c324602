use jobboard::accounts::AccountService;
use jobboard::applications::{ApplicationService, ResumeStorage, ResumeStorageError};
use jobboard::config::AppConfig;
use jobboard::jobs::JobService;
use jobboard::memory::{InMemoryApplicationStore, InMemoryJobStore, InMemoryUserStore};
use jobboard::moderation::ModerationService;
use metrics_exporter_prometheus::PrometheusHandle;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Writes uploaded resumes as individual files under a root directory.
#[derive(Debug, Clone)]
pub(crate) struct DiskResumeStorage {
    root: PathBuf,
}

impl DiskResumeStorage {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ResumeStorage for DiskResumeStorage {
    fn store(&self, bytes: &[u8], name: &str) -> Result<String, ResumeStorageError> {
        let write_err = |source: io::Error| ResumeStorageError::Write {
            name: name.to_string(),
            source,
        };

        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(write_err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "resume name must be a bare file name",
            )));
        }

        fs::create_dir_all(&self.root).map_err(write_err)?;
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.root.join(name))
            .map_err(write_err)?;
        file.write_all(bytes).map_err(write_err)?;
        file.sync_all().map_err(write_err)?;

        tracing::debug!(name, size = bytes.len(), "resume written");
        Ok(name.to_string())
    }

    fn discard(&self, reference: &str) -> Result<(), ResumeStorageError> {
        let remove_err = |source: io::Error| ResumeStorageError::Remove {
            name: reference.to_string(),
            source,
        };

        if reference.is_empty() || reference.contains(['/', '\\']) {
            return Err(remove_err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "resume reference must be a bare file name",
            )));
        }

        match fs::remove_file(self.root.join(reference)) {
            Ok(()) => {
                tracing::debug!(reference, "resume discarded");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(remove_err(err)),
        }
    }
}

pub(crate) type Jobs = JobService<InMemoryJobStore>;
pub(crate) type Applications =
    ApplicationService<InMemoryJobStore, InMemoryApplicationStore, DiskResumeStorage>;
pub(crate) type Accounts = AccountService<InMemoryUserStore>;
pub(crate) type Moderation =
    ModerationService<InMemoryUserStore, InMemoryJobStore, InMemoryApplicationStore>;

/// Services wired over one shared set of in-memory stores.
#[derive(Clone)]
pub(crate) struct Board {
    pub(crate) jobs: Arc<Jobs>,
    pub(crate) applications: Arc<Applications>,
    pub(crate) accounts: Arc<Accounts>,
    pub(crate) moderation: Arc<Moderation>,
}

impl Board {
    pub(crate) fn in_memory(config: &AppConfig) -> Self {
        let resumes = DiskResumeStorage::new(config.storage.resume_dir.clone());
        let users = Arc::new(InMemoryUserStore::default());
        let jobs = Arc::new(InMemoryJobStore::default());
        let applications = Arc::new(InMemoryApplicationStore::default());

        Self {
            jobs: Arc::new(JobService::new(jobs.clone())),
            applications: Arc::new(ApplicationService::new(
                jobs.clone(),
                applications.clone(),
                Arc::new(resumes),
                config.intake,
            )),
            accounts: Arc::new(AccountService::new(users.clone())),
            moderation: Arc::new(ModerationService::new(users, jobs, applications)),
        }
    }
}
