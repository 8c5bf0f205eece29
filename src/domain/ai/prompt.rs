//! AI 프롬프트 모듈
//!
//! 태스크별 고정 프롬프트 템플릿을 관리합니다.
//! 사용자 입력은 이스케이프나 길이 제한 없이 그대로 삽입됩니다.
//!
//! ## 구조
//! - `support`: 고객 지원 채팅 (system 프롬프트 포함)
//! - `banking`: 은행 문의 분류
//! - `medical`: 진료 기록 JSON 추출
//! - `mortgage`: 모기지 문의 이메일 답변
//! - `newsletter`: 뉴스레터 분석 리포트
//! - `examples`: 번들 예제 입력

pub mod banking;
pub mod examples;
pub mod medical;
pub mod mortgage;
pub mod newsletter;
pub mod support;
