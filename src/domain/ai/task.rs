//! 태스크 정의 테이블
//!
//! 다섯 개의 태스크는 프로세스 시작 시점부터 고정된 정적 데이터입니다.
//! 각 엔드포인트는 하나의 `TaskKind`에 묶여 있으므로 알 수 없는 태스크 이름이
//! 라우터까지 도달하는 경우는 없습니다.

use serde::Serialize;

use super::dto::TaskFields;
use super::prompt::{banking, medical, mortgage, newsletter, support};

/// 지원하는 태스크 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskKind {
    Chat,
    Categorize,
    ExtractMedical,
    MortgageResponse,
    AnalyzeNewsletter,
}

impl TaskKind {
    pub const ALL: [TaskKind; 5] = [
        TaskKind::Chat,
        TaskKind::Categorize,
        TaskKind::ExtractMedical,
        TaskKind::MortgageResponse,
        TaskKind::AnalyzeNewsletter,
    ];

    pub fn definition(self) -> &'static TaskDefinition {
        match self {
            TaskKind::Chat => &CHAT,
            TaskKind::Categorize => &CATEGORIZE,
            TaskKind::ExtractMedical => &EXTRACT_MEDICAL,
            TaskKind::MortgageResponse => &MORTGAGE_RESPONSE,
            TaskKind::AnalyzeNewsletter => &ANALYZE_NEWSLETTER,
        }
    }

    pub fn name(self) -> &'static str {
        self.definition().name
    }

    pub fn path(self) -> &'static str {
        self.definition().path
    }
}

/// 필수 입력 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredField {
    /// 요청 JSON 키
    pub name: &'static str,
    /// 에러 메시지에 쓰이는 이름 ("No {label} provided")
    pub label: &'static str,
}

/// 태스크 정의 (불변)
pub struct TaskDefinition {
    pub kind: TaskKind,
    pub name: &'static str,
    pub path: &'static str,
    pub required_fields: &'static [RequiredField],
    /// chat 태스크만 system 프롬프트를 가집니다
    pub system_prompt: Option<&'static str>,
    pub samples: &'static [&'static str],
    render: fn(&TaskFields) -> String,
}

impl TaskDefinition {
    /// 필드 값을 템플릿에 삽입한 사용자 프롬프트
    ///
    /// 검증을 통과한 필드를 전제로 하며, 없는 필드는 빈 문자열로 삽입됩니다.
    pub fn render(&self, fields: &TaskFields) -> String {
        (self.render)(fields)
    }
}

impl std::fmt::Debug for TaskDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskDefinition")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("required_fields", &self.required_fields)
            .field("system_prompt", &self.system_prompt.is_some())
            .finish()
    }
}

static CHAT: TaskDefinition = TaskDefinition {
    kind: TaskKind::Chat,
    name: "chat",
    path: "/chat",
    required_fields: &[RequiredField {
        name: "message",
        label: "message",
    }],
    system_prompt: Some(support::SYSTEM_PROMPT),
    samples: &super::prompt::examples::CHAT_MESSAGES,
    render: render_chat,
};

static CATEGORIZE: TaskDefinition = TaskDefinition {
    kind: TaskKind::Categorize,
    name: "categorize",
    path: "/categorize",
    required_fields: &[RequiredField {
        name: "query",
        label: "query",
    }],
    system_prompt: None,
    samples: &super::prompt::examples::BANK_QUERIES,
    render: render_categorize,
};

static EXTRACT_MEDICAL: TaskDefinition = TaskDefinition {
    kind: TaskKind::ExtractMedical,
    name: "extract-medical",
    path: "/extract-medical",
    required_fields: &[RequiredField {
        name: "medical_notes",
        label: "medical notes",
    }],
    system_prompt: None,
    samples: &super::prompt::examples::MEDICAL_NOTES,
    render: render_extract_medical,
};

static MORTGAGE_RESPONSE: TaskDefinition = TaskDefinition {
    kind: TaskKind::MortgageResponse,
    name: "mortgage-response",
    path: "/mortgage-response",
    required_fields: &[RequiredField {
        name: "email",
        label: "email",
    }],
    system_prompt: None,
    samples: &super::prompt::examples::MORTGAGE_EMAILS,
    render: render_mortgage_response,
};

static ANALYZE_NEWSLETTER: TaskDefinition = TaskDefinition {
    kind: TaskKind::AnalyzeNewsletter,
    name: "analyze-newsletter",
    path: "/analyze-newsletter",
    required_fields: &[RequiredField {
        name: "newsletter",
        label: "newsletter",
    }],
    system_prompt: None,
    samples: &super::prompt::examples::NEWSLETTERS,
    render: render_analyze_newsletter,
};

fn render_chat(fields: &TaskFields) -> String {
    support::user_prompt(fields.value("message"))
}

fn render_categorize(fields: &TaskFields) -> String {
    banking::user_prompt(fields.value("query"))
}

fn render_extract_medical(fields: &TaskFields) -> String {
    medical::user_prompt(fields.value("medical_notes"))
}

fn render_mortgage_response(fields: &TaskFields) -> String {
    mortgage::user_prompt(fields.value("email"))
}

fn render_analyze_newsletter(fields: &TaskFields) -> String {
    newsletter::user_prompt(fields.value("newsletter"))
}
