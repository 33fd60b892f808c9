/// Model ID constants
pub mod models {
    pub const DEFAULT_MODEL: &str = "gpt-4";
}

/// Environment variable names read by the config resolver
pub mod env {
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
    pub const BEAR_MODEL: &str = "BEAR_MODEL";
    pub const BEAR_MAX_TOKENS: &str = "BEAR_MAX_TOKENS";
    pub const BEAR_TIMEOUT_SECS: &str = "BEAR_TIMEOUT_SECS";
    pub const BEAR_MAX_RETRIES: &str = "BEAR_MAX_RETRIES";
}

/// Default values for optional settings
pub mod defaults {
    pub const DEFAULT_MAX_TOKENS: u32 = 2000;
    pub const DEFAULT_MAX_RETRIES: u32 = 0;
    pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
    pub const DEFAULT_LANGUAGE: &str = "python";
    pub const DEFAULT_ANALYZE_TASK: &str = "analyze this code";
}

/// Message role constants
pub mod message_roles {
    pub const SYSTEM: &str = "system";
    pub const USER: &str = "user";
    pub const ASSISTANT: &str = "assistant";
}

/// Retry backoff for transient remote failures
pub mod retry {
    pub const BASE_DELAY_MS: u64 = 1000;
    pub const MAX_EXPONENT: u32 = 10;
}

/// Prefixes used when failures are reported as text
pub mod messages {
    pub const CHAT_ERROR_PREFIX: &str = "Error communicating with AI:";
}
