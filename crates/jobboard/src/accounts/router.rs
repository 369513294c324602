use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use super::domain::{NewUser, User};
use super::repository::UserStore;
use super::service::AccountService;
use crate::access::Actor;
use crate::error::ServiceError;

pub fn account_router<U>(service: Arc<AccountService<U>>) -> Router
where
    U: UserStore + 'static,
{
    Router::new()
        .route("/api/v1/auth/register", post(register_handler::<U>))
        .route("/api/v1/users/me", get(me_handler::<U>))
        .with_state(service)
}

pub(crate) async fn register_handler<U>(
    State(service): State<Arc<AccountService<U>>>,
    Json(new_user): Json<NewUser>,
) -> Result<(StatusCode, Json<User>), ServiceError>
where
    U: UserStore + 'static,
{
    let user = service.register(new_user)?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub(crate) async fn me_handler<U>(
    State(service): State<Arc<AccountService<U>>>,
    actor: Actor,
) -> Result<Json<User>, ServiceError>
where
    U: UserStore + 'static,
{
    Ok(Json(service.get(&actor.id)?))
}
