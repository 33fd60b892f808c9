//! Provider abstraction for chat-completion style APIs.
//!
//! The agent talks to the remote model only through [`LLMProvider`], which keeps the
//! dispatcher testable with an in-memory provider.

use crate::config::constants::message_roles;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Chat request sent to a provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LLMRequest {
    pub model: String,
    pub messages: Vec<Message>,
}

impl LLMRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
        }
    }

    /// Whether any message in the request carries the system role
    pub fn has_system_message(&self) -> bool {
        self.messages.iter().any(|m| m.role == MessageRole::System)
    }
}

/// A single role-tagged message. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => message_roles::SYSTEM,
            MessageRole::User => message_roles::USER,
            MessageRole::Assistant => message_roles::ASSISTANT,
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider response reduced to what the agent needs
#[derive(Debug, Clone, PartialEq)]
pub struct LLMResponse {
    pub content: String,
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Remote model-inference API
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Provider name (e.g. "openai")
    fn name(&self) -> &str;

    /// Generate a completion for the full message list
    async fn generate(&self, request: LLMRequest) -> Result<LLMResponse, LLMError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LLMError {
    #[error("Authentication failed: {0}")]
    Authentication(String),
    #[error("Rate limit exceeded")]
    RateLimit,
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Provider error: {0}")]
    Provider(String),
}

impl LLMError {
    /// Failures worth another attempt under a retry policy
    pub fn is_transient(&self) -> bool {
        match self {
            LLMError::Network(_) | LLMError::RateLimit => true,
            LLMError::Provider(msg) => msg.starts_with("HTTP 5"),
            LLMError::Authentication(_) | LLMError::InvalidRequest(_) => false,
        }
    }
}
