use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: bool,
    pub checks: HealthChecks,
}

#[derive(Serialize)]
pub struct HealthChecks {
    pub engine_loaded: bool,
    pub codec_ready: bool,
    pub storage_writable: bool,
}

/// Always answers 200; callers read `status` and the individual checks.
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let report = state.health_service.check().await;

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: report.is_healthy(),
            checks: HealthChecks {
                engine_loaded: report.engine_loaded,
                codec_ready: report.codec_ready,
                storage_writable: report.storage_writable,
            },
        }),
    )
}
