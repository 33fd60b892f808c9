//! The Bear agent: a linear conversation over a single provider.

pub mod session;

pub use session::Session;

use crate::config::constants::messages;
use crate::config::types::{AgentConfig, BearConfig, ConfigError};
use crate::llm::provider::{LLMError, LLMProvider, LLMRequest, Message};
use crate::llm::providers::OpenAIProvider;
use crate::prompts::{PromptRequest, default_system_prompt};
use crate::utils::file_ops::{self, FileError};
use std::path::Path;

/// Coding agent that can analyze, generate, and modify code
pub struct BearAgent {
    config: AgentConfig,
    provider: Box<dyn LLMProvider>,
    session: Session,
}

impl BearAgent {
    /// Create an agent backed by the OpenAI provider
    pub fn new(config: AgentConfig) -> Self {
        let provider = OpenAIProvider::from_config(&config);
        Self::with_provider(config, Box::new(provider))
    }

    /// Resolve configuration from the environment and create an agent.
    ///
    /// Fails with [`ConfigError::MissingApiKey`] when `OPENAI_API_KEY` is unset.
    pub fn from_env(model_override: Option<String>) -> Result<Self, ConfigError> {
        let config = BearConfig::from_env()?.into_agent_config(model_override)?;
        Ok(Self::new(config))
    }

    /// Create an agent that talks to an arbitrary provider
    pub fn with_provider(config: AgentConfig, provider: Box<dyn LLMProvider>) -> Self {
        Self {
            config,
            provider,
            session: Session::new(),
        }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Conversation history in chronological order
    pub fn history(&self) -> &[Message] {
        self.session.snapshot()
    }

    pub fn clear_history(&mut self) {
        self.session.clear();
    }

    /// Assemble the outgoing message list for `message`.
    ///
    /// An explicit system prompt is always sent. Otherwise the default framing is sent only
    /// while the session has not been framed yet.
    pub fn build_messages(&self, message: &str, system_prompt: Option<&str>) -> Vec<Message> {
        let history = self.session.snapshot();
        let mut messages = Vec::with_capacity(history.len() + 2);

        match system_prompt.filter(|p| !p.is_empty()) {
            Some(prompt) => messages.push(Message::system(prompt)),
            None if !self.session.has_system_framing() => {
                messages.push(Message::system(default_system_prompt()))
            }
            None => {}
        }

        messages.extend_from_slice(history);
        messages.push(Message::user(message));
        messages
    }

    /// Send one turn and return the assistant's reply.
    ///
    /// History is updated only on success; a failed call leaves it untouched.
    pub async fn try_chat(
        &mut self,
        message: &str,
        system_prompt: Option<&str>,
    ) -> Result<String, LLMError> {
        let request = LLMRequest::new(
            self.config.model.clone(),
            self.build_messages(message, system_prompt),
        );

        tracing::debug!(
            provider = self.provider.name(),
            model = %request.model,
            history = self.session.len(),
            framed = request.has_system_message(),
            "dispatching chat turn"
        );

        let response = self.provider.generate(request).await.map_err(|err| {
            tracing::warn!(error = %err, "chat turn failed; history unchanged");
            err
        })?;

        if let Some(usage) = response.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "token usage"
            );
        }

        self.session.record_turn(message, response.content.clone());
        Ok(response.content)
    }

    /// Like [`try_chat`](Self::try_chat), but failures come back as an
    /// `"Error communicating with AI: ..."` string.
    pub async fn chat(&mut self, message: &str, system_prompt: Option<&str>) -> String {
        match self.try_chat(message, system_prompt).await {
            Ok(reply) => reply,
            Err(err) => format_chat_error(&err),
        }
    }

    /// Render `request` and send it as a freeform turn
    pub async fn try_send_prompt(
        &mut self,
        request: PromptRequest<'_>,
    ) -> Result<String, LLMError> {
        let prompt = request.render();
        self.try_chat(&prompt, None).await
    }

    pub async fn send_prompt(&mut self, request: PromptRequest<'_>) -> String {
        match self.try_send_prompt(request).await {
            Ok(reply) => reply,
            Err(err) => format_chat_error(&err),
        }
    }

    pub async fn try_analyze_code(&mut self, code: &str, task: &str) -> Result<String, LLMError> {
        self.try_send_prompt(PromptRequest::Analyze { task, code })
            .await
    }

    pub async fn try_generate_code(
        &mut self,
        description: &str,
        language: &str,
    ) -> Result<String, LLMError> {
        self.try_send_prompt(PromptRequest::Generate {
            description,
            language,
        })
        .await
    }

    pub async fn try_modify_code(
        &mut self,
        code: &str,
        instruction: &str,
    ) -> Result<String, LLMError> {
        self.try_send_prompt(PromptRequest::Modify { code, instruction })
            .await
    }

    pub async fn analyze_code(&mut self, code: &str, task: &str) -> String {
        self.send_prompt(PromptRequest::Analyze { task, code }).await
    }

    pub async fn generate_code(&mut self, description: &str, language: &str) -> String {
        self.send_prompt(PromptRequest::Generate {
            description,
            language,
        })
        .await
    }

    pub async fn modify_code(&mut self, code: &str, instruction: &str) -> String {
        self.send_prompt(PromptRequest::Modify { code, instruction })
            .await
    }

    /// Read `path` and analyze its contents. Read failures skip the remote call.
    pub async fn analyze_file(
        &mut self,
        path: impl AsRef<Path>,
        task: &str,
    ) -> Result<String, FileError> {
        let content = file_ops::read_file(path)?;
        Ok(self.analyze_code(&content, task).await)
    }

    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<String, FileError> {
        file_ops::read_file(path)
    }

    pub fn write_file(&self, path: impl AsRef<Path>, content: &str) -> Result<(), FileError> {
        file_ops::write_file(path, content)
    }
}

/// Render a provider failure the way it is shown in place of a reply
pub fn format_chat_error(err: &LLMError) -> String {
    format!("{} {}", messages::CHAT_ERROR_PREFIX, err)
}
