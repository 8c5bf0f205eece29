//! 모기지 문의 이메일 답변 프롬프트

/// 대출 상품 금리 정보 (상품, 금리, APR)
pub const LOAN_FACTS: [(&str, &str, &str); 9] = [
    ("30-year fixed-rate", "6.403%", "6.484%"),
    ("20-year fixed-rate", "6.329%", "6.429%"),
    ("15-year fixed-rate", "5.705%", "5.848%"),
    ("10-year fixed-rate", "5.500%", "5.720%"),
    ("7-year ARM", "7.011%", "7.660%"),
    ("5-year ARM", "6.880%", "7.754%"),
    ("3-year ARM", "6.125%", "7.204%"),
    ("30-year fixed-rate FHA", "5.527%", "6.316%"),
    ("30-year fixed-rate VA", "5.684%", "6.062%"),
];

/// 답변 메일 서명
pub const SIGNATURE: &str = "Lender Customer Support";

/// 답변 프롬프트 생성
pub fn user_prompt(email: &str) -> String {
    let facts = LOAN_FACTS
        .iter()
        .map(|(product, rate, apr)| format!("{product}: interest rate {rate}, APR {apr}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a mortgage lender customer service bot, and your task is to
create personalized email responses to address customer questions.
Answer the customer's inquiry using the provided facts below. Ensure
that your response is clear, concise, and directly addresses the
customer's question. Address the customer in a friendly and
professional manner. Sign the email with \"{SIGNATURE}.\"

# Facts
{facts}

# Email
{email}
"
    )
}
