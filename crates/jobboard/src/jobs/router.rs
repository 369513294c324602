use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use super::domain::{Job, JobId, JobPosting};
use super::repository::JobStore;
use super::search::SearchCriteria;
use super::service::JobService;
use crate::access::Actor;
use crate::error::ServiceError;

/// Router exposing job catalog and search endpoints.
pub fn job_router<J>(service: Arc<JobService<J>>) -> Router
where
    J: JobStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/jobs",
            post(create_handler::<J>).get(list_handler::<J>),
        )
        .route("/api/v1/jobs/search", post(search_handler::<J>))
        .route(
            "/api/v1/jobs/:job_id",
            get(get_handler::<J>)
                .put(update_handler::<J>)
                .delete(delete_handler::<J>),
        )
        .route("/api/v1/employer/jobs", get(employer_jobs_handler::<J>))
        .with_state(service)
}

pub(crate) async fn create_handler<J>(
    State(service): State<Arc<JobService<J>>>,
    actor: Actor,
    Json(posting): Json<JobPosting>,
) -> Result<(StatusCode, Json<Job>), ServiceError>
where
    J: JobStore + 'static,
{
    let job = service.create(&actor.id, posting)?;
    Ok((StatusCode::CREATED, Json(job)))
}

pub(crate) async fn list_handler<J>(
    State(service): State<Arc<JobService<J>>>,
) -> Result<Json<Vec<Job>>, ServiceError>
where
    J: JobStore + 'static,
{
    Ok(Json(service.list_all()?))
}

pub(crate) async fn get_handler<J>(
    State(service): State<Arc<JobService<J>>>,
    Path(job_id): Path<String>,
) -> Result<Json<Job>, ServiceError>
where
    J: JobStore + 'static,
{
    Ok(Json(service.get(&JobId(job_id))?))
}

pub(crate) async fn update_handler<J>(
    State(service): State<Arc<JobService<J>>>,
    actor: Actor,
    Path(job_id): Path<String>,
    Json(posting): Json<JobPosting>,
) -> Result<Json<Job>, ServiceError>
where
    J: JobStore + 'static,
{
    Ok(Json(service.update(&JobId(job_id), posting, &actor.id)?))
}

pub(crate) async fn delete_handler<J>(
    State(service): State<Arc<JobService<J>>>,
    actor: Actor,
    Path(job_id): Path<String>,
) -> Result<StatusCode, ServiceError>
where
    J: JobStore + 'static,
{
    service.delete(&JobId(job_id), &actor.id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn employer_jobs_handler<J>(
    State(service): State<Arc<JobService<J>>>,
    actor: Actor,
) -> Result<Json<Vec<Job>>, ServiceError>
where
    J: JobStore + 'static,
{
    Ok(Json(service.list_by_employer(&actor.id)?))
}

pub(crate) async fn search_handler<J>(
    State(service): State<Arc<JobService<J>>>,
    Json(criteria): Json<SearchCriteria>,
) -> Result<Json<Vec<Job>>, ServiceError>
where
    J: JobStore + 'static,
{
    Ok(Json(service.search(&criteria)?))
}
