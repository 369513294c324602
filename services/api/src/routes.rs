use crate::infra::{AppState, Board};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use jobboard::accounts::account_router;
use jobboard::applications::application_router;
use jobboard::jobs::job_router;
use jobboard::moderation::admin_router;
use serde_json::json;

/// Every public route: the job board API plus operational probes.
pub(crate) fn with_board_routes(board: &Board) -> Router {
    job_router(board.jobs.clone())
        .merge(application_router(board.applications.clone()))
        .merge(account_router(board.accounts.clone()))
        .merge(admin_router(board.moderation.clone()))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    if state.readiness.load(std::sync::atomic::Ordering::Relaxed) {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "initializing" })),
        )
    }
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
