//! 진료 기록 정보 추출 프롬프트
//!
//! 모델이 반환한 JSON은 서버에서 검증하지 않고 그대로 전달합니다.

/// 추출 결과 JSON 스키마 지시문
pub const JSON_SCHEMA_INSTRUCTION: &str = r#"Return json format with the following JSON schema:
{
  "age": {
    "type": "integer"
  },
  "gender": {
    "type": "string",
    "enum": ["male", "female", "other"]
  },
  "diagnosis": {
    "type": "string",
    "enum": ["migraine", "diabetes", "arthritis", "acne"]
  },
  "weight": {
    "type": "integer"
  },
  "smoking": {
    "type": "string",
    "enum": ["yes", "no"]
  }
}"#;

/// 추출 프롬프트 생성
pub fn user_prompt(medical_notes: &str) -> String {
    format!(
        "Extract information from the following medical notes:\n{medical_notes}\n{JSON_SCHEMA_INSTRUCTION}\n"
    )
}
