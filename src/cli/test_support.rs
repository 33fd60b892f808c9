//! Scripted provider and helpers shared by the command handler tests

use super::context::CommandContext;
use async_trait::async_trait;
use bearcode_core::{AgentConfig, BearAgent, LLMError, LLMProvider, LLMRequest, LLMResponse};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Provider that replays scripted results and counts calls
#[derive(Clone, Default)]
pub struct ScriptedProvider {
    replies: Arc<Mutex<VecDeque<Result<String, LLMError>>>>,
    calls: Arc<AtomicUsize>,
    never_replies: bool,
}

impl ScriptedProvider {
    pub fn new(replies: Vec<Result<String, LLMError>>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into())),
            ..Self::default()
        }
    }

    pub fn replying(replies: &[&str]) -> Self {
        Self::new(replies.iter().map(|r| Ok(r.to_string())).collect())
    }

    /// A provider whose calls stay pending forever
    pub fn stalled() -> Self {
        Self {
            never_replies: true,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LLMProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, _request: LLMRequest) -> Result<LLMResponse, LLMError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.never_replies {
            std::future::pending::<()>().await;
        }
        let next = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LLMError::Provider("script exhausted".to_string())));
        next.map(|content| LLMResponse {
            content,
            usage: None,
        })
    }
}

pub fn agent_with(provider: &ScriptedProvider) -> BearAgent {
    let config = AgentConfig::new("k1", "gpt-4").unwrap();
    BearAgent::with_provider(config, Box::new(provider.clone()))
}

pub fn quiet_context() -> CommandContext {
    CommandContext::new(false)
}
