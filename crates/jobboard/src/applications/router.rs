use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;

use super::domain::{
    Application, ApplicationId, ApplicationStatus, ApplicationSubmission, ResumePayload,
};
use super::repository::{ApplicationStore, ResumeStorage};
use super::service::ApplicationService;
use crate::access::Actor;
use crate::error::ServiceError;
use crate::jobs::{JobId, JobStore};

/// Submission with the resume carried inline as an encoded string.
#[derive(Debug, Clone, Deserialize)]
pub struct InlineApplicationRequest {
    pub job_id: JobId,
    pub resume: String,
    #[serde(default)]
    pub cover_letter: Option<String>,
}

/// Query parameters accompanying a raw resume upload body.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadParams {
    pub job_id: JobId,
    pub file_name: String,
    #[serde(default)]
    pub cover_letter: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: ApplicationStatus,
}

/// Router builder exposing application intake and review endpoints.
pub fn application_router<J, A, F>(service: Arc<ApplicationService<J, A, F>>) -> Router
where
    J: JobStore + 'static,
    A: ApplicationStore + 'static,
    F: ResumeStorage + 'static,
{
    Router::new()
        .route("/api/v1/applications", post(submit_inline_handler::<J, A, F>))
        .route(
            "/api/v1/applications/upload",
            post(submit_upload_handler::<J, A, F>),
        )
        .route("/api/v1/applications/mine", get(mine_handler::<J, A, F>))
        .route(
            "/api/v1/applications/:application_id/status",
            put(status_handler::<J, A, F>),
        )
        .route(
            "/api/v1/jobs/:job_id/applications",
            get(job_applications_handler::<J, A, F>),
        )
        .with_state(service)
}

pub(crate) async fn submit_inline_handler<J, A, F>(
    State(service): State<Arc<ApplicationService<J, A, F>>>,
    actor: Actor,
    Json(request): Json<InlineApplicationRequest>,
) -> Result<(StatusCode, Json<Application>), ServiceError>
where
    J: JobStore + 'static,
    A: ApplicationStore + 'static,
    F: ResumeStorage + 'static,
{
    let submission = ApplicationSubmission {
        job_id: request.job_id,
        resume: ResumePayload::Inline(request.resume),
        cover_letter: request.cover_letter,
    };
    let application = service.submit(&actor.id, submission)?;
    Ok((StatusCode::CREATED, Json(application)))
}

pub(crate) async fn submit_upload_handler<J, A, F>(
    State(service): State<Arc<ApplicationService<J, A, F>>>,
    actor: Actor,
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> Result<(StatusCode, Json<Application>), ServiceError>
where
    J: JobStore + 'static,
    A: ApplicationStore + 'static,
    F: ResumeStorage + 'static,
{
    let submission = ApplicationSubmission {
        job_id: params.job_id,
        resume: ResumePayload::Upload {
            file_name: params.file_name,
            bytes: body.to_vec(),
        },
        cover_letter: params.cover_letter,
    };
    let application = service.submit(&actor.id, submission)?;
    Ok((StatusCode::CREATED, Json(application)))
}

pub(crate) async fn mine_handler<J, A, F>(
    State(service): State<Arc<ApplicationService<J, A, F>>>,
    actor: Actor,
) -> Result<Json<Vec<Application>>, ServiceError>
where
    J: JobStore + 'static,
    A: ApplicationStore + 'static,
    F: ResumeStorage + 'static,
{
    Ok(Json(service.list_by_applicant(&actor.id)?))
}

pub(crate) async fn job_applications_handler<J, A, F>(
    State(service): State<Arc<ApplicationService<J, A, F>>>,
    actor: Actor,
    Path(job_id): Path<String>,
) -> Result<Json<Vec<Application>>, ServiceError>
where
    J: JobStore + 'static,
    A: ApplicationStore + 'static,
    F: ResumeStorage + 'static,
{
    Ok(Json(service.list_by_job(&JobId(job_id), &actor.id)?))
}

pub(crate) async fn status_handler<J, A, F>(
    State(service): State<Arc<ApplicationService<J, A, F>>>,
    actor: Actor,
    Path(application_id): Path<String>,
    Json(request): Json<StatusUpdateRequest>,
) -> Result<Json<Application>, ServiceError>
where
    J: JobStore + 'static,
    A: ApplicationStore + 'static,
    F: ResumeStorage + 'static,
{
    let application =
        service.update_status(&ApplicationId(application_id), request.status, &actor.id)?;
    Ok(Json(application))
}
