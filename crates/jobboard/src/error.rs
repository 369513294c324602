use crate::access::AccessDenied;
use crate::accounts::UserId;
use crate::applications::{ApplicationId, ResumeStorageError};
use crate::config::ConfigError;
use crate::jobs::JobId;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

/// Top-level error for binaries embedding the job board.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Service(ServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Service(err) => write!(f, "service error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Service(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Service(err) => err.into_response(),
            other => {
                tracing::error!(error = %other, "request failed");
                let body = Json(json!({ "error": other.to_string() }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<ServiceError> for AppError {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}

/// Failures reported by the backing document stores.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Record kinds the services look up by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Job(JobId),
    Application(ApplicationId),
    User(UserId),
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Job(id) => write!(f, "job {id}"),
            Resource::Application(id) => write!(f, "application {id}"),
            Resource::User(id) => write!(f, "user {id}"),
        }
    }
}

/// Coarse classification every service failure maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    Forbidden,
    Conflict,
    Validation,
    Storage,
}

impl FailureKind {
    pub const fn label(self) -> &'static str {
        match self {
            FailureKind::NotFound => "not_found",
            FailureKind::Forbidden => "forbidden",
            FailureKind::Conflict => "conflict",
            FailureKind::Validation => "validation_failure",
            FailureKind::Storage => "storage_failure",
        }
    }

    pub const fn status_code(self) -> StatusCode {
        match self {
            FailureKind::NotFound => StatusCode::NOT_FOUND,
            FailureKind::Forbidden => StatusCode::FORBIDDEN,
            FailureKind::Conflict => StatusCode::CONFLICT,
            FailureKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            FailureKind::Storage => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error raised by the job, application, account, and moderation services.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(Resource),
    #[error(transparent)]
    Forbidden(#[from] AccessDenied),
    #[error("user {user_id} has already applied for job {job_id}")]
    DuplicateApplication { user_id: UserId, job_id: JobId },
    #[error("job {0} is no longer accepting applications")]
    JobInactive(JobId),
    #[error("email {0} is already registered")]
    DuplicateEmail(String),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    ResumeStorage(#[from] ResumeStorageError),
}

impl ServiceError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ServiceError::NotFound(_) | ServiceError::Repository(RepositoryError::NotFound) => {
                FailureKind::NotFound
            }
            ServiceError::Forbidden(_) => FailureKind::Forbidden,
            ServiceError::DuplicateApplication { .. }
            | ServiceError::JobInactive(_)
            | ServiceError::DuplicateEmail(_)
            | ServiceError::Repository(RepositoryError::Conflict) => FailureKind::Conflict,
            ServiceError::Validation(_) => FailureKind::Validation,
            ServiceError::Repository(RepositoryError::Unavailable(_))
            | ServiceError::ResumeStorage(_) => FailureKind::Storage,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let message = match kind {
            FailureKind::Storage => {
                tracing::error!(error = %self, "storage failure");
                "a storage error occurred".to_string()
            }
            _ => self.to_string(),
        };

        let body = Json(json!({
            "error": {
                "kind": kind.label(),
                "message": message,
            }
        }));
        (kind.status_code(), body).into_response()
    }
}
