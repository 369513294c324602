use std::sync::Arc;

use axum::response::Response;
use chrono::Utc;
use serde_json::Value;

use crate::accounts::UserId;
use crate::jobs::{Job, JobPosting, JobService, JobStore, JobType};
use crate::memory::InMemoryJobStore;

pub(super) const EMPLOYER: &str = "emp-1";
pub(super) const OTHER_EMPLOYER: &str = "emp-2";

pub(super) fn posting(title: &str) -> JobPosting {
    JobPosting {
        title: title.to_string(),
        company: "Contoso".to_string(),
        location: "Lisbon, Portugal".to_string(),
        job_type: JobType::FullTime,
        description: "Design and operate ingestion services".to_string(),
        salary: Some("$80k-$100k".to_string()),
        requirements: vec!["Rust".to_string(), "Postgres".to_string()],
        experience_level: Some("SENIOR".to_string()),
        remote: false,
        category: Some("Engineering".to_string()),
        deadline: None,
    }
}

pub(super) fn build_service() -> (JobService<InMemoryJobStore>, Arc<InMemoryJobStore>) {
    let store = Arc::new(InMemoryJobStore::default());
    (JobService::new(store.clone()), store)
}

/// Inserts a job straight into the store, bypassing validation.
pub(super) fn seed(store: &InMemoryJobStore, posting: JobPosting, employer: &str) -> Job {
    store
        .insert(Job::from_posting(posting, UserId::from(employer), Utc::now()))
        .expect("job inserted")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
