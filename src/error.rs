use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::response::TaskReply;

/// 애플리케이션 전역 에러 타입
///
/// 검증 에러(400)와 외부 API 에러(500) 두 종류로 나뉩니다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 필수 필드 누락 (값은 사람이 읽는 필드 이름)
    #[error("No {0} provided")]
    MissingField(&'static str),

    /// 요청 본문 파싱 실패
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// 외부 completion API 호출 실패 (원본 에러 메시지 그대로)
    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// HTTP 상태 코드 반환
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField(_) | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.status_code() == StatusCode::BAD_REQUEST
    }

    /// 공통 에러 응답으로 변환
    pub fn to_reply(&self) -> TaskReply {
        match self {
            AppError::Upstream(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "Task failed");
            }
            _ => {
                tracing::warn!(error = %self, "Task request rejected");
            }
        }

        TaskReply::failed(self.status_code(), self.to_string())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        AppError::Upstream(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_reply().into_response()
    }
}

/// JsonRejection을 AppError로 변환
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::ResponseStatus;

    #[test]
    fn missing_field_should_name_the_field() {
        let error = AppError::MissingField("medical notes");

        assert_eq!(error.to_string(), "No medical notes provided");
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert!(error.is_validation());
    }

    #[test]
    fn upstream_error_should_keep_message_verbatim() {
        let error = AppError::upstream("boom");

        assert_eq!(error.to_string(), "boom");
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!error.is_validation());
    }

    #[test]
    fn invalid_body_should_be_bad_request() {
        let error = AppError::InvalidBody("expected value".to_string());

        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert!(error.to_string().contains("expected value"));
    }

    #[test]
    fn to_reply_should_wrap_message_in_error_envelope() {
        let reply = AppError::upstream("boom").to_reply();

        assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(reply.body.status(), ResponseStatus::Error);
        assert_eq!(reply.body.error_message(), Some("boom"));
    }
}
