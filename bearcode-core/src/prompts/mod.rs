//! Prompt construction for analyze, generate, modify, and freeform chat.

pub mod system;
pub mod templates;

pub use system::{DEFAULT_SYSTEM_PROMPT, default_system_prompt};
pub use templates::{
    PromptRequest, build_analyze_prompt, build_generate_prompt, build_modify_prompt,
    default_analyze_task,
};
