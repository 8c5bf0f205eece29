//! 은행 고객 문의 분류 프롬프트

/// 분류 대상 카테고리 (이름, 설명)
pub const CATEGORIES: [(&str, &str); 7] = [
    (
        "Account Management",
        "Questions related to opening, closing, or managing bank accounts.",
    ),
    (
        "Transaction Issues",
        "Inquiries about unauthorized charges, failed transactions, or disputes.",
    ),
    (
        "Loan Services",
        "Requests for information on personal, home, or auto loans.",
    ),
    (
        "Credit Cards",
        "Queries about credit card applications, benefits, or billing.",
    ),
    (
        "Online Banking",
        "Issues related to internet banking, mobile app access, or technical support.",
    ),
    (
        "Fraud and Security",
        "Reports of suspicious activity or questions about account security.",
    ),
    (
        "General Information",
        "Requests for branch locations, operating hours, or bank policies.",
    ),
];

/// 어느 카테고리에도 속하지 않을 때 사용하는 이름
pub const FALLBACK_CATEGORY: &str = "Other";

/// 분류 프롬프트 생성
pub fn user_prompt(query: &str) -> String {
    let categories = CATEGORIES
        .iter()
        .map(|(name, description)| format!("{name}: {description}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an AI assistant trained to support a bank's customer service team. \
Your task is to categorize customer inquiries into one of the following predefined categories:

{categories}

Given the customer inquiry below, determine the most appropriate category from the list above. \
If the inquiry doesn't fit any category, classify it as '{FALLBACK_CATEGORY}'. \
Respond with the category name only.

Query: {query}
"
    )
}
