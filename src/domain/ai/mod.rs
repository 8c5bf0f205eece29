pub mod client;
pub mod dto;
pub mod handler;
pub mod prompt;
pub mod service;
pub mod task;
pub mod validator;

pub use client::{CompletionClient, CompletionClientTrait, CompletionRequest, OpenAiCompatClient};
pub use dto::TaskFields;
pub use service::PromptRouter;
pub use task::TaskKind;
