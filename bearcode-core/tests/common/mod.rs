use async_trait::async_trait;
use bearcode_core::{AgentConfig, BearAgent, LLMError, LLMProvider, LLMRequest, LLMResponse};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Provider that replays scripted results and records every request it sees
#[derive(Clone, Default)]
pub struct ScriptedProvider {
    replies: Arc<Mutex<VecDeque<Result<String, LLMError>>>>,
    requests: Arc<Mutex<Vec<LLMRequest>>>,
}

impl ScriptedProvider {
    pub fn new(replies: Vec<Result<String, LLMError>>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn replying(replies: &[&str]) -> Self {
        Self::new(replies.iter().map(|r| Ok(r.to_string())).collect())
    }

    pub fn requests(&self) -> Vec<LLMRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> LLMRequest {
        self.requests().last().cloned().expect("no request recorded")
    }
}

#[async_trait]
impl LLMProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, request: LLMRequest) -> Result<LLMResponse, LLMError> {
        self.requests.lock().unwrap().push(request);
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
