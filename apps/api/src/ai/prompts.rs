//! Prompt constants for the enhancement and feedback endpoints.

/// Enhancement prompt. Replace `{resume_text}` before sending.
pub const ENHANCE_PROMPT_TEMPLATE: &str = r#"Enhance the following resume text.
- Improve grammar
- Rewrite into strong ATS-optimized bullets
- Use measurable achievements
- Improve tone
- Output ONLY improved resume text.

Resume:
{resume_text}
"#;

/// Single-turn feedback prompt. Replace `{message}` before sending.
pub const FEEDBACK_PROMPT_TEMPLATE: &str = r#"You are a resume and career coach.
Answer the user's question with concrete, actionable advice in a few short paragraphs.

Question:
{message}
"#;

pub fn build_enhance_prompt(resume_text: &str) -> String {
    ENHANCE_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}

pub fn build_feedback_prompt(message: &str) -> String {
    FEEDBACK_PROMPT_TEMPLATE.replace("{message}", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enhance_prompt_embeds_resume() {
        let prompt = build_enhance_prompt("Built APIs at Acme");
        assert!(prompt.contains("Built APIs at Acme"));
        assert!(!prompt.contains("{resume_text}"));
        assert!(prompt.contains("ATS-optimized"));
    }

    #[test]
    fn test_feedback_prompt_embeds_message() {
        let prompt = build_feedback_prompt("How do I list a career gap?");
        assert!(prompt.contains("How do I list a career gap?"));
        assert!(!prompt.contains("{message}"));
    }
}
