//! Multi-criteria job filter.
//!
//! Every criterion is independent and optional. An absent or empty criterion is
//! a wildcard; present criteria are AND-ed together. Only active jobs are ever
//! returned, in the order the caller supplied them.

use serde::{Deserialize, Serialize};

use super::domain::{Job, JobType};

/// Search request. `Default` is the all-wildcard query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCriteria {
    /// Case-insensitive match against title or description.
    pub text_query: Option<String>,
    /// Case-insensitive substring of the job location.
    pub location: Option<String>,
    pub job_types: Vec<JobType>,
    pub experience_levels: Vec<String>,
    /// Free-text tokens; the job's salary text must contain at least one.
    pub salary_ranges: Vec<String>,
    pub remote_only: bool,
}

impl SearchCriteria {
    pub fn is_wildcard(&self) -> bool {
        blank(&self.text_query)
            && blank(&self.location)
            && self.job_types.is_empty()
            && self.experience_levels.is_empty()
            && self.salary_ranges.is_empty()
            && !self.remote_only
    }

    /// True when an active job satisfies every present criterion.
    pub fn matches(&self, job: &Job) -> bool {
        job.active
            && self.matches_text(job)
            && self.matches_location(job)
            && self.matches_job_type(job)
            && self.matches_experience(job)
            && self.matches_salary(job)
            && self.matches_remote(job)
    }

    fn matches_text(&self, job: &Job) -> bool {
        match non_blank(&self.text_query) {
            None => true,
            Some(query) => {
                let needle = query.to_lowercase();
                job.title.to_lowercase().contains(&needle)
                    || job.description.to_lowercase().contains(&needle)
            }
        }
    }

    fn matches_location(&self, job: &Job) -> bool {
        match non_blank(&self.location) {
            None => true,
            Some(location) => job
                .location
                .to_lowercase()
                .contains(&location.to_lowercase()),
        }
    }

    fn matches_job_type(&self, job: &Job) -> bool {
        self.job_types.is_empty() || self.job_types.contains(&job.job_type)
    }

    fn matches_experience(&self, job: &Job) -> bool {
        if self.experience_levels.is_empty() {
            return true;
        }
        job.experience_level
            .as_ref()
            .is_some_and(|level| self.experience_levels.contains(level))
    }

    fn matches_salary(&self, job: &Job) -> bool {
        if self.salary_ranges.is_empty() {
            return true;
        }
        match &job.salary {
            Some(salary) if !salary.is_empty() => self
                .salary_ranges
                .iter()
                .any(|token| salary.contains(token.as_str())),
            _ => false,
        }
    }

    fn matches_remote(&self, job: &Job) -> bool {
        !self.remote_only || job.remote
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

fn blank(value: &Option<String>) -> bool {
    non_blank(value).is_none()
}

/// Returns clones of the matching jobs in input order; the input is untouched.
pub fn search<'a, I>(jobs: I, criteria: &SearchCriteria) -> Vec<Job>
where
    I: IntoIterator<Item = &'a Job>,
{
    jobs.into_iter()
        .filter(|job| criteria.matches(job))
        .cloned()
        .collect()
}
