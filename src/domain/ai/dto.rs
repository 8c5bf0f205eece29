use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::task::{TaskDefinition, TaskKind};
use crate::error::AppError;

/// 요청 필드 모음 (필드 이름 → 값)
///
/// JSON 객체 본문에서 생성됩니다.
/// - `null`, `false`, `0`, `[]`, `{}` 값은 필드가 없는 것으로 취급합니다
/// - 문자열은 그대로 사용합니다
/// - 그 외 값은 JSON 텍스트 표현을 사용합니다
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFields(HashMap<String, String>);

impl TaskFields {
    pub fn from_json(body: Value) -> Result<Self, AppError> {
        let Value::Object(map) = body else {
            return Err(AppError::InvalidBody(
                "request body must be a JSON object".to_string(),
            ));
        };

        let fields = map
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(text) => Some((key, text)),
                other if is_blank(&other) => None,
                other => Some((key, other.to_string())),
            })
            .collect();

        Ok(Self(fields))
    }

    /// 비어 있지 않은 값만 반환
    pub fn get_non_empty(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// 템플릿 삽입용 값 (없으면 빈 문자열)
    pub fn value(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// 값이 없는 것으로 볼 JSON 값
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::String(text) => text.is_empty(),
        Value::Bool(true) => false,
    }
}

impl FromIterator<(String, String)> for TaskFields {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// 채팅 요청 (OpenAPI 스키마용)
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ChatRequest {
    #[schema(example = "How do I reset my password?")]
    pub message: String,
}

/// 문의 분류 요청 (OpenAPI 스키마용)
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CategorizeRequest {
    #[schema(example = "My card was stolen")]
    pub query: String,
}

/// 진료 기록 추출 요청 (OpenAPI 스키마용)
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ExtractMedicalRequest {
    #[schema(example = "A 60-year-old male patient was diagnosed with diabetes.")]
    pub medical_notes: String,
}

/// 모기지 이메일 답변 요청 (OpenAPI 스키마용)
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct MortgageResponseRequest {
    #[schema(example = "What's your 30-year fixed-rate APR?")]
    pub email: String,
}

/// 뉴스레터 분석 요청 (OpenAPI 스키마용)
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AnalyzeNewsletterRequest {
    #[schema(example = "Q3 2023 Market Update ...")]
    pub newsletter: String,
}

/// 태스크 카탈로그 응답
#[derive(Debug, Serialize, ToSchema)]
pub struct TaskCatalog {
    pub tasks: Vec<TaskSummary>,
}

impl TaskCatalog {
    pub fn all() -> Self {
        Self {
            tasks: TaskKind::ALL
                .iter()
                .map(|kind| TaskSummary::from(kind.definition()))
                .collect(),
        }
    }
}

/// 태스크 요약 정보
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    #[schema(value_type = String, example = "categorize")]
    pub name: &'static str,
    #[schema(value_type = String, example = "/categorize")]
    pub path: &'static str,
    #[schema(value_type = Vec<String>)]
    pub required_fields: Vec<&'static str>,
    pub has_system_prompt: bool,
    /// 그대로 요청 본문으로 보낼 수 있는 예제
    #[schema(value_type = Vec<Object>)]
    pub samples: Vec<BTreeMap<&'static str, &'static str>>,
}

impl From<&'static TaskDefinition> for TaskSummary {
    fn from(definition: &'static TaskDefinition) -> Self {
        let field = definition.required_fields.first().map(|f| f.name);

        Self {
            name: definition.name,
            path: definition.path,
            required_fields: definition.required_fields.iter().map(|f| f.name).collect(),
            has_system_prompt: definition.system_prompt.is_some(),
            samples: field
                .map(|field| {
                    definition
                        .samples
                        .iter()
                        .map(|sample| BTreeMap::from([(field, *sample)]))
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_build_fields_from_object() {
        // Arrange
        let body = json!({ "query": "My card was stolen", "extra": "ignored" });

        // Act
        let fields = TaskFields::from_json(body).unwrap();

        // Assert
        assert_eq!(fields.get_non_empty("query"), Some("My card was stolen"));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn should_reject_non_object_body() {
        for body in [json!("text"), json!([1, 2]), json!(null), json!(3)] {
            let result = TaskFields::from_json(body);
            assert!(matches!(result, Err(AppError::InvalidBody(_))));
        }
    }

    #[test]
    fn null_and_empty_values_should_count_as_missing() {
        let fields = TaskFields::from_json(json!({ "message": null, "email": "" })).unwrap();

        assert_eq!(fields.get_non_empty("message"), None);
        assert_eq!(fields.get_non_empty("email"), None);
        assert_eq!(fields.get_non_empty("absent"), None);
    }

    #[test]
    fn whitespace_value_should_be_kept() {
        let fields = TaskFields::from_json(json!({ "message": "   " })).unwrap();

        assert_eq!(fields.get_non_empty("message"), Some("   "));
    }

    #[test]
    fn non_string_scalars_should_use_json_text() {
        let fields =
            TaskFields::from_json(json!({ "query": 42, "flag": true, "list": [1] })).unwrap();

        assert_eq!(fields.value("query"), "42");
        assert_eq!(fields.value("flag"), "true");
        assert_eq!(fields.value("list"), "[1]");
    }

    #[test]
    fn empty_non_string_values_should_count_as_missing() {
        let body = json!({ "a": false, "b": 0, "c": 0.0, "d": [], "e": {} });

        let fields = TaskFields::from_json(body).unwrap();

        assert!(fields.is_empty());
        for name in ["a", "b", "c", "d", "e"] {
            assert_eq!(fields.get_non_empty(name), None, "{name}");
        }
    }

    #[test]
    fn value_should_default_to_empty_string() {
        let fields = TaskFields::default();

        assert!(fields.is_empty());
        assert_eq!(fields.value("anything"), "");
    }

    #[test]
    fn catalog_should_list_all_tasks_with_camel_case_keys() {
        let json = serde_json::to_value(TaskCatalog::all()).unwrap();

        let tasks = json["tasks"].as_array().unwrap();
        assert_eq!(tasks.len(), 5);
        assert_eq!(tasks[0]["name"], "chat");
        assert_eq!(tasks[0]["hasSystemPrompt"], true);
        assert_eq!(tasks[2]["requiredFields"], json!(["medical_notes"]));
        assert!(tasks[2]["samples"][0]["medical_notes"]
            .as_str()
            .unwrap()
            .contains("diabetes"));
    }
}
