//! Job postings: catalog operations and the search evaluator.

pub mod domain;
pub mod repository;
pub mod router;
pub mod search;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Job, JobId, JobPosting, JobType};
pub use repository::JobStore;
pub use router::job_router;
pub use search::{search, SearchCriteria};
pub use service::JobService;
