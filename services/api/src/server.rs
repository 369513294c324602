use crate::cli::ServeArgs;
use crate::infra::{AppState, Board};
use crate::routes::with_board_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use jobboard::config::AppConfig;
use jobboard::error::AppError;
use jobboard::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(resume_dir) = args.resume_dir.take() {
        config.storage.resume_dir = resume_dir;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let board = Board::in_memory(&config);
    let app = with_board_routes(&board)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        resume_dir = %config.storage.resume_dir.display(),
        accept_inactive_jobs = config.intake.accept_inactive_jobs,
        "job board api ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
