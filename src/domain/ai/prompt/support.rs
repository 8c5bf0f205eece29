//! 고객 지원 채팅 프롬프트
//!
//! chat 태스크만 system 메시지를 사용합니다. 사용자 메시지는 그대로 전달됩니다.

/// 고객 지원 상담원 페르소나
pub const SYSTEM_PROMPT: &str = "You are a helpful customer support assistant.
Provide clear, concise, and friendly responses to customer inquiries.
If you're unsure about something, be honest and suggest escalating to a human agent.";

/// 사용자 프롬프트 생성 (메시지를 가공 없이 사용)
pub fn user_prompt(message: &str) -> String {
    message.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_should_not_be_empty() {
        assert!(!SYSTEM_PROMPT.trim().is_empty());
    }

    #[test]
    fn system_prompt_should_mention_escalation() {
        assert!(SYSTEM_PROMPT.contains("customer support"));
        assert!(SYSTEM_PROMPT.contains("human agent"));
    }

    #[test]
    fn user_prompt_should_be_message_verbatim() {
        let message = "How do I reset my password?\n\nThanks";

        assert_eq!(user_prompt(message), message);
    }
}
