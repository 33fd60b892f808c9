//! Prompt templates for the canned tasks.
//!
//! The wording is fixed: model output quality depends on the exact phrasing, so these
//! strings must not be reworded.

use crate::config::constants::defaults;

/// A request shape that renders to a single user prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptRequest<'a> {
    Analyze { task: &'a str, code: &'a str },
    Generate { description: &'a str, language: &'a str },
    Modify { code: &'a str, instruction: &'a str },
    Chat { message: &'a str },
}

impl PromptRequest<'_> {
    pub fn render(&self) -> String {
        match self {
            PromptRequest::Analyze { task, code } => build_analyze_prompt(task, code),
            PromptRequest::Generate {
                description,
                language,
            } => build_generate_prompt(description, language),
            PromptRequest::Modify { code, instruction } => build_modify_prompt(code, instruction),
            PromptRequest::Chat { message } => (*message).to_string(),
        }
    }
}

/// Default task phrase for analysis
pub fn default_analyze_task() -> &'static str {
    defaults::DEFAULT_ANALYZE_TASK
}

pub fn build_analyze_prompt(task: &str, code: &str) -> String {
    format!("{task}\n\n```\n{code}\n```")
}

pub fn build_generate_prompt(description: &str, language: &str) -> String {
    format!(
        "Generate {language} code for the following:\n{description}\n\nProvide only the code without explanations."
    )
}

pub fn build_modify_prompt(code: &str, instruction: &str) -> String {
    format!(
        "Modify the following code according to this instruction: {instruction}\n\n```\n{code}\n```\n\nProvide only the modified code."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_prompt_literal() {
        assert_eq!(
            build_analyze_prompt("review this", "x=1"),
            "review this\n\n```\nx=1\n```"
        );
    }

    #[test]
    fn test_analyze_prompt_default_task() {
        let prompt = build_analyze_prompt(default_analyze_task(), "fn main() {}");
        assert!(prompt.starts_with("analyze this code\n\n```\n"));
    }

    #[test]
    fn test_generate_prompt_literal() {
        assert_eq!(
            build_generate_prompt("a fizzbuzz function", "rust"),
            "Generate rust code for the following:\na fizzbuzz function\n\nProvide only the code without explanations."
        );
    }

    #[test]
    fn test_modify_prompt_literal() {
        assert_eq!(
            build_modify_prompt("x = 1", "rename x to y"),
            "Modify the following code according to this instruction: rename x to y\n\n```\nx = 1\n```\n\nProvide only the modified code."
        );
    }

    #[test]
    fn test_chat_prompt_is_unmodified() {
        let message = "  hello\n```odd``` ";
        assert_eq!(PromptRequest::Chat { message }.render(), message);
    }

    #[test]
    fn test_render_is_deterministic() {
        let request = PromptRequest::Analyze {
            task: "review this",
            code: "x=1",
        };
        assert_eq!(request.render(), request.render());
        assert_eq!(request.render(), build_analyze_prompt("review this", "x=1"));
    }
}
