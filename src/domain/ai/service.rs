use std::sync::Arc;

use super::client::{CompletionClient, CompletionRequest};
use super::dto::TaskFields;
use super::task::TaskKind;
use super::validator::validate_required_fields;
use crate::error::AppError;
use crate::response::TaskReply;

/// 프롬프트 라우터
///
/// 태스크 정의를 찾아 필수 필드를 검증하고, 템플릿을 렌더링한 뒤
/// completion 클라이언트로 전달합니다. 모든 실패는 이 경계에서 응답으로 변환됩니다.
#[derive(Clone)]
pub struct PromptRouter {
    client: CompletionClient,
    model: Arc<str>,
}

impl PromptRouter {
    pub fn new(client: CompletionClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: Arc::from(model.into()),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// 검증과 렌더링만 수행 (외부 호출 없음)
    pub fn prepare(&self, task: TaskKind, fields: &TaskFields) -> Result<CompletionRequest, AppError> {
        let definition = task.definition();
        validate_required_fields(definition, fields)?;

        Ok(CompletionRequest {
            system_prompt: definition.system_prompt.map(str::to_string),
            user_prompt: definition.render(fields),
            model: self.model.to_string(),
        })
    }

    /// 태스크를 실행하고 모델 응답 텍스트를 반환
    pub async fn run(&self, task: TaskKind, fields: &TaskFields) -> Result<String, AppError> {
        let request = self.prepare(task, fields)?;

        tracing::debug!(
            task = task.name(),
            prompt_length = request.user_prompt.len(),
            has_system_prompt = request.system_prompt.is_some(),
            "Prompt rendered"
        );

        let text = self.client.complete(request).await?;

        tracing::info!(
            task = task.name(),
            response_length = text.len(),
            "Task completed"
        );

        Ok(text)
    }

    /// 공통 응답 형식으로 감싼 결과
    pub async fn handle(&self, task: TaskKind, fields: &TaskFields) -> TaskReply {
        match self.run(task, fields).await {
            Ok(text) => TaskReply::ok(text),
            Err(e) => e.to_reply(),
        }
    }
}
