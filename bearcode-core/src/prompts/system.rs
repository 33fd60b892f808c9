//! System framing sent on the first turn of a session.

/// Default system prompt used when the caller supplies none
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are Bear Code, an expert AI coding agent that helps with code analysis, generation, and modification. Be concise and practical.";

pub fn default_system_prompt() -> &'static str {
    DEFAULT_SYSTEM_PROMPT
}
