use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use super::dto::HealthStatus;
use crate::AppState;

/// 헬스체크 API
///
/// 외부 API를 호출하지 않으며 항상 200을 반환합니다.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "헬스체크 성공", body = HealthStatus)
    )
)]
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}

/// Prometheus 메트릭 (recorder가 설치된 경우에만 라우팅됨)
pub async fn render_metrics(State(state): State<AppState>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (StatusCode::NOT_FOUND, String::new()),
    }
}
