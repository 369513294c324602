//! Ownership checks and the authenticated actor handed to every operation.
//!
//! Authentication happens upstream; the identity provider forwards the actor id
//! and role in the `x-actor-id` and `x-actor-role` headers.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::accounts::{Role, UserId};

pub const ACTOR_ID_HEADER: &str = "x-actor-id";
pub const ACTOR_ROLE_HEADER: &str = "x-actor-role";

/// Authenticated principal performing an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: UserId,
    pub role: Role,
}

impl Actor {
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: UserId(id.into()),
            role,
        }
    }
}

/// Raised when the requester is neither the owner nor allowed through the admin path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessDenied {
    #[error("user {requester} does not own this resource")]
    NotOwner { owner: UserId, requester: UserId },
    #[error("user {requester} is not an administrator")]
    NotAdmin { requester: UserId },
}

/// Passes only when the requester is the recorded owner.
pub fn ensure_owner(owner: &UserId, requester: &UserId) -> Result<(), AccessDenied> {
    if owner == requester {
        Ok(())
    } else {
        Err(AccessDenied::NotOwner {
            owner: owner.clone(),
            requester: requester.clone(),
        })
    }
}

/// Gate for the moderation surface. Ownership is never consulted here.
pub fn require_admin(actor: &Actor) -> Result<(), AccessDenied> {
    match actor.role {
        Role::Admin => Ok(()),
        Role::Employer | Role::JobSeeker => Err(AccessDenied::NotAdmin {
            requester: actor.id.clone(),
        }),
    }
}

/// Rejection for requests that arrive without a usable identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActorRejection {
    MissingId,
    MissingRole,
    UnknownRole(String),
}

impl IntoResponse for ActorRejection {
    fn into_response(self) -> Response {
        let message = match self {
            ActorRejection::MissingId => format!("missing {ACTOR_ID_HEADER} header"),
            ActorRejection::MissingRole => format!("missing {ACTOR_ROLE_HEADER} header"),
            ActorRejection::UnknownRole(raw) => format!("unknown role '{raw}'"),
        };
        let body = Json(json!({
            "error": {
                "kind": "unauthenticated",
                "message": message,
            }
        }));
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}

fn header_value<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

#[async_trait]
impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = ActorRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = header_value(parts, ACTOR_ID_HEADER).ok_or(ActorRejection::MissingId)?;
        let raw_role = header_value(parts, ACTOR_ROLE_HEADER).ok_or(ActorRejection::MissingRole)?;
        let role =
            Role::parse(raw_role).ok_or_else(|| ActorRejection::UnknownRole(raw_role.to_string()))?;

        Ok(Actor::new(id, role))
    }
}
