//! 뉴스레터 분석 리포트 프롬프트

/// 분석 리포트 프롬프트 생성
pub fn user_prompt(newsletter: &str) -> String {
    format!(
        r#"You are a commentator. Your task is to write a report on a newsletter.
When presented with the newsletter, come up with interesting questions to ask,
and answer each question.
Afterward, combine all the information and write a report in the markdown
format.

# Newsletter:
{newsletter}

# Instructions:
## Summarize:
In clear and concise language, summarize the key points and themes
presented in the newsletter.
## Interesting Questions:
Generate three distinct and thought-provoking questions that can be
asked about the content of the newsletter. For each question:
- After "Q: ", describe the problem
- After "A: ", provide a detailed explanation of the problem addressed
in the question.
- Enclose the ultimate answer in <>.
## Write a analysis report
Using the summary and the answers to the interesting questions,
create a comprehensive report in Markdown format.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_embed_newsletter_verbatim() {
        let newsletter = "Q3 2023 Market Update\n\nAI continued to dominate headlines.";

        assert!(user_prompt(newsletter).contains(newsletter));
    }

    #[test]
    fn should_request_summary_questions_and_report() {
        let prompt = user_prompt("news");

        assert!(prompt.contains("## Summarize:"));
        assert!(prompt.contains("three distinct and thought-provoking questions"));
        assert!(prompt.contains(r#"After "Q: ""#));
        assert!(prompt.contains(r#"After "A: ""#));
        assert!(prompt.contains("Markdown format"));
    }
}
