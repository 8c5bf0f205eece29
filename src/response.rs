use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// 응답 상태 값
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// 모든 태스크 엔드포인트가 공통으로 사용하는 응답 형식
///
/// 형식:
/// ```json
/// { "status": "success", "response": "..." }
/// { "status": "error", "error": "..." }
/// ```
///
/// `response`와 `error` 중 정확히 하나만 존재하도록 생성자로만 만들 수 있습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TaskResponse {
    #[schema(example = "success")]
    status: ResponseStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Account Management")]
    response: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl TaskResponse {
    /// 성공 응답 생성
    pub fn success(response: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            response: Some(response.into()),
            error: None,
        }
    }

    /// 에러 응답 생성
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            response: None,
            error: Some(message.into()),
        }
    }

    pub fn status(&self) -> ResponseStatus {
        self.status
    }

    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}

/// HTTP 상태 코드와 응답 본문의 묶음
///
/// 라우터의 최종 결과이며 그대로 axum 응답으로 변환됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskReply {
    pub status: StatusCode,
    pub body: TaskResponse,
}

impl TaskReply {
    pub fn ok(response: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: TaskResponse::success(response),
        }
    }

    pub fn failed(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: TaskResponse::error(message),
        }
    }
}

impl IntoResponse for TaskReply {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
