//! # bearcode-core - Runtime for Bear Code
//!
//! `bearcode-core` powers the Bear Code terminal coding agent. It holds a linear
//! conversation with an OpenAI-compatible chat-completions API and builds prompts for
//! three canned coding tasks plus freeform chat.
//!
//! ## Architecture Overview
//!
//! - `config/`: environment resolution (`OPENAI_API_KEY`, `BEAR_MODEL`, ...) into an
//!   immutable [`AgentConfig`].
//! - `llm/`: the [`LLMProvider`] seam, the OpenAI implementation, and the request
//!   timeout/retry policy.
//! - `prompts/`: fixed prompt templates and the default system framing.
//! - `core/agent`: the session store and the chat dispatcher ([`BearAgent`]).
//! - `utils/`: text file access with typed errors.
//! - `ui/`: terminal styling, markdown rendering, and the spinner.
//!
//! ## Quickstart
//!
//! ```rust,no_run
//! use bearcode_core::BearAgent;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), anyhow::Error> {
//!     let mut agent = BearAgent::from_env(None)?;
//!     let reply = agent.chat("Explain Rust lifetimes in one paragraph", None).await;
//!     println!("{reply}");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod llm;
pub mod prompts;
pub mod ui;
pub mod utils;

pub use config::{AgentConfig, BearConfig, ConfigError};
pub use crate::core::agent::{BearAgent, Session, format_chat_error};
pub use llm::{LLMError, LLMProvider, LLMRequest, LLMResponse, Message, MessageRole};
pub use prompts::PromptRequest;
pub use utils::FileError;
