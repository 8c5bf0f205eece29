use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use super::dto::{
    AnalyzeNewsletterRequest, CategorizeRequest, ChatRequest, ExtractMedicalRequest,
    MortgageResponseRequest, TaskCatalog, TaskFields,
};
use super::task::TaskKind;
use crate::error::AppError;
use crate::response::TaskResponse;
use crate::AppState;

/// 모든 태스크 엔드포인트가 공유하는 처리 흐름
///
/// 본문 파싱 → 필드 추출 → 프롬프트 라우터 호출
async fn dispatch(
    state: &AppState,
    task: TaskKind,
    request: Result<Json<Value>, JsonRejection>,
) -> Response {
    let fields = match request
        .map_err(AppError::from)
        .and_then(|Json(body)| TaskFields::from_json(body))
    {
        Ok(fields) => fields,
        Err(e) => return e.into_response(),
    };

    tracing::info!(
        task = task.name(),
        field_count = fields.len(),
        "Task request received"
    );

    state.prompt_router.handle(task, &fields).await.into_response()
}

/// 고객 지원 채팅
#[utoipa::path(
    post,
    path = "/chat",
    tag = "Tasks",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "응답 생성 성공", body = TaskResponse),
        (status = 400, description = "message 누락 또는 잘못된 JSON", body = TaskResponse),
        (status = 500, description = "외부 API 에러", body = TaskResponse)
    )
)]
pub async fn chat(
    State(state): State<AppState>,
    request: Result<Json<Value>, JsonRejection>,
) -> Response {
    dispatch(&state, TaskKind::Chat, request).await
}

/// 은행 고객 문의 분류
#[utoipa::path(
    post,
    path = "/categorize",
    tag = "Tasks",
    request_body = CategorizeRequest,
    responses(
        (status = 200, description = "분류 성공", body = TaskResponse),
        (status = 400, description = "query 누락 또는 잘못된 JSON", body = TaskResponse),
        (status = 500, description = "외부 API 에러", body = TaskResponse)
    )
)]
pub async fn categorize(
    State(state): State<AppState>,
    request: Result<Json<Value>, JsonRejection>,
) -> Response {
    dispatch(&state, TaskKind::Categorize, request).await
}

/// 진료 기록 정보 추출
///
/// 모델이 생성한 JSON 텍스트를 검증 없이 `response`에 담아 반환합니다.
#[utoipa::path(
    post,
    path = "/extract-medical",
    tag = "Tasks",
    request_body = ExtractMedicalRequest,
    responses(
        (status = 200, description = "추출 성공", body = TaskResponse),
        (status = 400, description = "medical_notes 누락 또는 잘못된 JSON", body = TaskResponse),
        (status = 500, description = "외부 API 에러", body = TaskResponse)
    )
)]
pub async fn extract_medical(
    State(state): State<AppState>,
    request: Result<Json<Value>, JsonRejection>,
) -> Response {
    dispatch(&state, TaskKind::ExtractMedical, request).await
}

/// 모기지 문의 이메일 답변 작성
#[utoipa::path(
    post,
    path = "/mortgage-response",
    tag = "Tasks",
    request_body = MortgageResponseRequest,
    responses(
        (status = 200, description = "답변 생성 성공", body = TaskResponse),
        (status = 400, description = "email 누락 또는 잘못된 JSON", body = TaskResponse),
        (status = 500, description = "외부 API 에러", body = TaskResponse)
    )
)]
pub async fn mortgage_response(
    State(state): State<AppState>,
    request: Result<Json<Value>, JsonRejection>,
) -> Response {
    dispatch(&state, TaskKind::MortgageResponse, request).await
}

/// 뉴스레터 분석 리포트 (Markdown)
#[utoipa::path(
    post,
    path = "/analyze-newsletter",
    tag = "Tasks",
    request_body = AnalyzeNewsletterRequest,
    responses(
        (status = 200, description = "리포트 생성 성공", body = TaskResponse),
        (status = 400, description = "newsletter 누락 또는 잘못된 JSON", body = TaskResponse),
        (status = 500, description = "외부 API 에러", body = TaskResponse)
    )
)]
pub async fn analyze_newsletter(
    State(state): State<AppState>,
    request: Result<Json<Value>, JsonRejection>,
) -> Response {
    dispatch(&state, TaskKind::AnalyzeNewsletter, request).await
}

/// 태스크 카탈로그
///
/// 각 태스크의 경로, 필수 필드, 번들 예제를 반환합니다.
#[utoipa::path(
    get,
    path = "/tasks",
    tag = "Tasks",
    responses(
        (status = 200, description = "카탈로그 조회 성공", body = TaskCatalog)
    )
)]
pub async fn list_tasks() -> Json<TaskCatalog> {
    Json(TaskCatalog::all())
}
