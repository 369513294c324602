use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, put},
    Json, Router,
};
use serde::Deserialize;

use super::service::{ModerationService, Statistics};
use crate::access::{require_admin, Actor};
use crate::accounts::{User, UserId, UserStore};
use crate::applications::ApplicationStore;
use crate::error::ServiceError;
use crate::jobs::{Job, JobId, JobStore};

#[derive(Debug, Clone, Deserialize)]
pub struct ModerateRequest {
    pub active: bool,
}

/// Administrator surface. Every handler checks the admin role first.
pub fn admin_router<U, J, A>(service: Arc<ModerationService<U, J, A>>) -> Router
where
    U: UserStore + 'static,
    J: JobStore + 'static,
    A: ApplicationStore + 'static,
{
    Router::new()
        .route("/api/v1/admin/users", get(users_handler::<U, J, A>))
        .route(
            "/api/v1/admin/users/:user_id",
            delete(ban_handler::<U, J, A>),
        )
        .route(
            "/api/v1/admin/statistics",
            get(statistics_handler::<U, J, A>),
        )
        .route(
            "/api/v1/admin/jobs/:job_id/moderate",
            put(moderate_handler::<U, J, A>),
        )
        .with_state(service)
}

pub(crate) async fn users_handler<U, J, A>(
    State(service): State<Arc<ModerationService<U, J, A>>>,
    actor: Actor,
) -> Result<Json<Vec<User>>, ServiceError>
where
    U: UserStore + 'static,
    J: JobStore + 'static,
    A: ApplicationStore + 'static,
{
    require_admin(&actor)?;
    Ok(Json(service.list_users()?))
}

pub(crate) async fn ban_handler<U, J, A>(
    State(service): State<Arc<ModerationService<U, J, A>>>,
    actor: Actor,
    Path(user_id): Path<String>,
) -> Result<StatusCode, ServiceError>
where
    U: UserStore + 'static,
    J: JobStore + 'static,
    A: ApplicationStore + 'static,
{
    require_admin(&actor)?;
    service.ban_user(&UserId(user_id))?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn statistics_handler<U, J, A>(
    State(service): State<Arc<ModerationService<U, J, A>>>,
    actor: Actor,
) -> Result<Json<Statistics>, ServiceError>
where
    U: UserStore + 'static,
    J: JobStore + 'static,
    A: ApplicationStore + 'static,
{
    require_admin(&actor)?;
    Ok(Json(service.statistics()?))
}

pub(crate) async fn moderate_handler<U, J, A>(
    State(service): State<Arc<ModerationService<U, J, A>>>,
    actor: Actor,
    Path(job_id): Path<String>,
    Json(request): Json<ModerateRequest>,
) -> Result<Json<Job>, ServiceError>
where
    U: UserStore + 'static,
    J: JobStore + 'static,
    A: ApplicationStore + 'static,
{
    require_admin(&actor)?;
    Ok(Json(service.moderate_job(&JobId(job_id), request.active)?))
}
