use std::env;
use std::time::Duration;

/// 기본 모델 식별자
pub const DEFAULT_CHAT_MODEL: &str = "mistral-tiny";

/// 기본 completion API 주소 (OpenAI 호환)
pub const DEFAULT_API_BASE: &str = "https://api.mistral.ai/v1";

const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// 애플리케이션 설정
///
/// 프로세스 시작 시 한 번만 로드됩니다.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,

    // Completion API
    pub api_key: String,
    pub api_base: String,
    pub chat_model: String,
    pub completion_timeout: Duration,
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 조회 함수로 설정 로드 (테스트에서 환경 변수 대신 사용)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("MISTRAL_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let api_base = lookup("COMPLETION_API_BASE")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let chat_model = lookup("CHAT_MODEL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string());

        let completion_timeout = match lookup("COMPLETION_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let server_port = match lookup("SERVER_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8080,
        };

        Ok(Self {
            server_host,
            server_port,
            api_key,
            api_base,
            chat_model,
            completion_timeout,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("MISTRAL_API_KEY environment variable is required")]
    MissingApiKey,
    #[error("Invalid port number: {0}")]
    InvalidPort(String),
    #[error("Invalid completion timeout (expected positive seconds): {0}")]
    InvalidTimeout(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn should_fail_without_api_key() {
        let result = AppConfig::from_lookup(lookup_from(&[]));

        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn should_treat_blank_api_key_as_missing() {
        let result = AppConfig::from_lookup(lookup_from(&[("MISTRAL_API_KEY", "  ")]));

        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn should_apply_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[("MISTRAL_API_KEY", "key")])).unwrap();

        assert_eq!(config.api_key, "key");
        assert_eq!(config.chat_model, DEFAULT_CHAT_MODEL);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.completion_timeout, Duration::from_secs(60));
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn should_read_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("MISTRAL_API_KEY", "key"),
            ("CHAT_MODEL", "mistral-small"),
            ("COMPLETION_API_BASE", "http://localhost:1234/v1"),
            ("COMPLETION_TIMEOUT_SECS", "5"),
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "3000"),
        ]))
        .unwrap();

        assert_eq!(config.chat_model, "mistral-small");
        assert_eq!(config.api_base, "http://localhost:1234/v1");
        assert_eq!(config.completion_timeout, Duration::from_secs(5));
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn should_reject_invalid_port() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("MISTRAL_API_KEY", "key"),
            ("SERVER_PORT", "http"),
        ]));

        assert!(matches!(result, Err(ConfigError::InvalidPort(_))));
    }

    #[test]
    fn should_reject_zero_timeout() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("MISTRAL_API_KEY", "key"),
            ("COMPLETION_TIMEOUT_SECS", "0"),
        ]));

        assert!(matches!(result, Err(ConfigError::InvalidTimeout(_))));
    }
}
