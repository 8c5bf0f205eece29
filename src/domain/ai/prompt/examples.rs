//! 태스크별 번들 예제 입력
//!
//! 프런트엔드가 "예제 선택" 목록으로 보여주는 입력값이며 `/tasks` 카탈로그로 제공됩니다.

pub const CHAT_MESSAGES: [&str; 3] = [
    "How do I reset my password?",
    "What are your business hours?",
    "I need help with my order",
];

pub const BANK_QUERIES: [&str; 3] = [
    "How can I get a credit card?",
    "I want to open a new account",
    "My card was stolen",
];

pub const MEDICAL_NOTES: [&str; 1] = [
    "A 60-year-old male patient, Mr. Johnson, presented with symptoms
of increased thirst, frequent urination, fatigue, and unexplained
weight loss. Upon evaluation, he was diagnosed with diabetes,
confirmed by elevated blood sugar levels. Mr. Johnson's weight
is 210 lbs. He has been prescribed Metformin to be taken twice daily
with meals. It was noted during the consultation that the patient is
a current smoker.",
];

pub const MORTGAGE_EMAILS: [&str; 1] = [
    "Dear mortgage lender,

What's your 30-year fixed-rate APR, and how does it compare to the 15-year
fixed rate? I'm trying to decide which term would be better for me.

Best regards,
John",
];

pub const NEWSLETTERS: [&str; 1] = [
    "Q3 2023 Market Update

The third quarter saw significant developments in the tech sector, with AI
continuing to dominate headlines. Major companies announced new AI products,
while concerns about AI safety led to increased calls for regulation.

In financial markets, inflation showed signs of cooling, though central banks
maintained their hawkish stance. The S&P 500 experienced volatility but
ended the quarter with modest gains.

The real estate market remained challenging due to high interest rates,
with home sales declining in most regions. However, rental markets showed
strength in urban areas.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn examples_should_not_be_empty() {
        let all = CHAT_MESSAGES
            .iter()
            .chain(BANK_QUERIES.iter())
            .chain(MEDICAL_NOTES.iter())
            .chain(MORTGAGE_EMAILS.iter())
            .chain(NEWSLETTERS.iter());

        for example in all {
            assert!(!example.trim().is_empty());
        }
    }

    #[test]
    fn medical_example_should_mention_schema_fields() {
        let note = MEDICAL_NOTES[0];

        assert!(note.contains("60-year-old male"));
        assert!(note.contains("diabetes"));
        assert!(note.contains("210 lbs"));
        assert!(note.contains("smoker"));
    }
}
