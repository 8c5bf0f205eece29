use std::sync::Arc;
use std::time::{Duration, Instant};

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};

use crate::error::AppError;

/// 외부 API로 보내는 completion 요청
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub system_prompt: Option<String>,
    pub user_prompt: String,
    pub model: String,
}

impl CompletionRequest {
    /// system 메시지(있으면)와 user 메시지 순서의 메시지 목록
    pub fn messages(&self) -> Result<Vec<ChatCompletionRequestMessage>, AppError> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system_prompt) = &self.system_prompt {
            messages.push(build_system_message(system_prompt)?);
        }
        messages.push(build_user_message(&self.user_prompt)?);
        Ok(messages)
    }
}

/// Completion 클라이언트 인터페이스
///
/// 외부 API 호출을 추상화하여 테스트에서 Mock 객체로 대체할 수 있습니다.
/// 모든 실패는 `AppError::Upstream` 하나로 전달되며 재시도하지 않습니다.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CompletionClientTrait: Send + Sync {
    /// 첫 번째 choice의 메시지 내용을 그대로 반환
    async fn complete(&self, request: CompletionRequest) -> Result<String, AppError>;
}

/// Arc로 래핑된 클라이언트 (Clone 지원)
pub type CompletionClient = Arc<dyn CompletionClientTrait>;

/// OpenAI 호환 chat completions API 클라이언트 구현체 (기본값: Mistral)
#[derive(Clone)]
pub struct OpenAiCompatClient {
    client: Client<OpenAIConfig>,
    timeout: Duration,
}

impl OpenAiCompatClient {
    pub fn new(api_key: &str, api_base: &str, timeout: Duration) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_base);

        // async-openai의 내장 rate-limit 재시도를 끕니다
        let no_retry = backoff::ExponentialBackoff {
            max_elapsed_time: Some(Duration::ZERO),
            ..Default::default()
        };

        Self {
            client: Client::with_config(config).with_backoff(no_retry),
            timeout,
        }
    }
}

#[async_trait::async_trait]
impl CompletionClientTrait for OpenAiCompatClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, AppError> {
        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(request.model.as_str())
            .messages(request.messages()?)
            .build()
            .map_err(|e| AppError::internal(e.to_string()))?;

        let start = Instant::now();
        let response = tokio::time::timeout(self.timeout, self.client.chat().create(chat_request))
            .await
            .map_err(|_| {
                AppError::upstream(format!(
                    "Completion request timed out after {}s",
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| AppError::upstream(e.to_string()))?;

        tracing::debug!(
            model = %request.model,
            latency_ms = start.elapsed().as_millis() as u64,
            choices = response.choices.len(),
            "Completion received"
        );

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::upstream("Completion response contained no message content"))
    }
}

/// 메시지 빌더 헬퍼 함수 (crate 내부용)
pub(crate) fn build_system_message(content: &str) -> Result<ChatCompletionRequestMessage, AppError> {
    Ok(ChatCompletionRequestMessage::System(
        ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()
            .map_err(|e| AppError::internal(e.to_string()))?,
    ))
}

pub(crate) fn build_user_message(content: &str) -> Result<ChatCompletionRequestMessage, AppError> {
    Ok(ChatCompletionRequestMessage::User(
        ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()
            .map_err(|e| AppError::internal(e.to_string()))?,
    ))
}
