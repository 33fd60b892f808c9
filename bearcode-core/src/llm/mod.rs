//! # LLM Integration Layer
//!
//! A single provider seam ([`LLMProvider`]) with an OpenAI chat-completions implementation.
//! Requests carry the model identifier and the ordered message list; responses are reduced
//! to the first choice's text.

pub mod provider;
pub mod providers;
pub mod retry;

pub use provider::{LLMError, LLMProvider, LLMRequest, LLMResponse, Message, MessageRole, Usage};
pub use providers::OpenAIProvider;
pub use retry::RequestPolicy;
