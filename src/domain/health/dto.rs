use serde::Serialize;
use utoipa::ToSchema;

/// 헬스체크 응답
///
/// completion API 상태와 무관하게 프로세스가 요청을 받을 수 있으면 healthy입니다.
#[derive(Serialize, Debug, PartialEq, Eq, ToSchema)]
pub struct HealthStatus {
    #[schema(value_type = String, example = "healthy")]
    pub status: &'static str,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self { status: "healthy" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_status_should_serialize_single_field() {
        let json = serde_json::to_value(HealthStatus::healthy()).unwrap();

        assert_eq!(json, serde_json::json!({ "status": "healthy" }));
    }
}
