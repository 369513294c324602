use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::accounts::UserId;

/// Identifier wrapper for job postings.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Employment type. Labels outside the known set are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Temporary,
    Other(String),
}

impl JobType {
    pub fn label(&self) -> &str {
        match self {
            JobType::FullTime => "FULL_TIME",
            JobType::PartTime => "PART_TIME",
            JobType::Contract => "CONTRACT",
            JobType::Internship => "INTERNSHIP",
            JobType::Temporary => "TEMPORARY",
            JobType::Other(label) => label,
        }
    }
}

impl From<String> for JobType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "FULL_TIME" => JobType::FullTime,
            "PART_TIME" => JobType::PartTime,
            "CONTRACT" => JobType::Contract,
            "INTERNSHIP" => JobType::Internship,
            "TEMPORARY" => JobType::Temporary,
            _ => JobType::Other(value),
        }
    }
}

impl From<JobType> for String {
    fn from(value: JobType) -> Self {
        match value {
            JobType::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

/// Stored job posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub description: String,
    pub salary: Option<String>,
    pub requirements: Vec<String>,
    pub experience_level: Option<String>,
    pub remote: bool,
    pub category: Option<String>,
    pub posted_date: DateTime<Utc>,
    pub deadline: Option<NaiveDate>,
    pub active: bool,
    pub employer_id: UserId,
}

impl Job {
    /// Builds an unsaved, active job owned by `employer`.
    pub fn from_posting(posting: JobPosting, employer: UserId, posted_date: DateTime<Utc>) -> Self {
        Self {
            id: JobId::default(),
            title: posting.title,
            company: posting.company,
            location: posting.location,
            job_type: posting.job_type,
            description: posting.description,
            salary: posting.salary,
            requirements: posting.requirements,
            experience_level: posting.experience_level,
            remote: posting.remote,
            category: posting.category,
            posted_date,
            deadline: posting.deadline,
            active: true,
            employer_id: employer,
        }
    }

    /// Replaces the editable fields. Identity, ownership, company, posting date
    /// and the moderation flag are untouched.
    pub fn apply_posting(&mut self, posting: JobPosting) {
        self.title = posting.title;
        self.location = posting.location;
        self.job_type = posting.job_type;
        self.description = posting.description;
        self.salary = posting.salary;
        self.requirements = posting.requirements;
        self.experience_level = posting.experience_level;
        self.remote = posting.remote;
        self.category = posting.category;
        self.deadline = posting.deadline;
    }
}

/// Employer-supplied fields for creating or editing a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub description: String,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub remote: bool,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
}

impl JobPosting {
    pub(crate) fn validate(&self) -> Result<(), String> {
        let required = [
            ("title", &self.title),
            ("company", &self.company),
            ("location", &self.location),
            ("description", &self.description),
        ];
        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| *field)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(format!("missing required fields: {}", missing.join(", ")))
        }
    }
}
