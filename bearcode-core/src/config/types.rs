//! Configuration resolved from the process environment.

use crate::config::api_keys::{get_openai_api_key, non_empty};
use crate::config::constants::{defaults, env, models};
use crate::llm::retry::RequestPolicy;
use std::fmt;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "OpenAI API key must be provided or set in OPENAI_API_KEY environment variable"
    )]
    MissingApiKey,
    #[error("Invalid value for {name}: {value:?} ({reason})")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Settings read from the environment, before the API key requirement is enforced.
#[derive(Clone)]
pub struct BearConfig {
    openai_api_key: Option<String>,
    pub default_model: String,
    /// Parsed and validated but not sent with requests.
    pub max_tokens: u32,
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub max_retries: u32,
}

impl BearConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_tokens = match non_empty(&lookup, env::BEAR_MAX_TOKENS) {
            Some(raw) => parse_positive(env::BEAR_MAX_TOKENS, &raw)?,
            None => defaults::DEFAULT_MAX_TOKENS,
        };

        let timeout = match non_empty(&lookup, env::BEAR_TIMEOUT_SECS) {
            Some(raw) => Some(Duration::from_secs(u64::from(parse_positive(
                env::BEAR_TIMEOUT_SECS,
                &raw,
            )?))),
            None => None,
        };

        let max_retries = match non_empty(&lookup, env::BEAR_MAX_RETRIES) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|e| ConfigError::InvalidValue {
                    name: env::BEAR_MAX_RETRIES,
                    value: raw.clone(),
                    reason: e.to_string(),
                })?,
            None => defaults::DEFAULT_MAX_RETRIES,
        };

        Ok(Self {
            openai_api_key: get_openai_api_key(&lookup).ok(),
            default_model: non_empty(&lookup, env::BEAR_MODEL)
                .unwrap_or_else(|| models::DEFAULT_MODEL.to_string()),
            max_tokens,
            base_url: non_empty(&lookup, env::OPENAI_BASE_URL)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| defaults::OPENAI_BASE_URL.to_string()),
            timeout,
            max_retries,
        })
    }

    /// True when an API key is available
    pub fn validate(&self) -> bool {
        self.openai_api_key.is_some()
    }

    pub fn api_key(&self) -> Option<&str> {
        self.openai_api_key.as_deref()
    }

    pub fn request_policy(&self) -> RequestPolicy {
        RequestPolicy {
            timeout: self.timeout,
            max_retries: self.max_retries,
        }
    }

    /// Build the agent configuration, failing when no API key is set.
    ///
    /// `model_override` takes precedence over `BEAR_MODEL`.
    pub fn into_agent_config(
        self,
        model_override: Option<String>,
    ) -> Result<AgentConfig, ConfigError> {
        let policy = self.request_policy();
        let api_key = self.openai_api_key.ok_or(ConfigError::MissingApiKey)?;
        let model = model_override
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(self.default_model);

        Ok(AgentConfig {
            api_key,
            model,
            max_tokens: self.max_tokens,
            base_url: self.base_url,
            policy,
        })
    }
}

impl fmt::Debug for BearConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearConfig")
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "<redacted>"))
            .field("default_model", &self.default_model)
            .field("max_tokens", &self.max_tokens)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

/// Immutable configuration for one agent instance
#[derive(Clone)]
pub struct AgentConfig {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub base_url: String,
    pub policy: RequestPolicy,
}

impl AgentConfig {
    /// Construct directly from a key and model, with default endpoint and policy
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        Ok(Self {
            api_key,
            model: model.into(),
            max_tokens: defaults::DEFAULT_MAX_TOKENS,
            base_url: defaults::OPENAI_BASE_URL.to_string(),
            policy: RequestPolicy::default(),
        })
    }
}

impl fmt::Debug for AgentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("base_url", &self.base_url)
            .field("policy", &self.policy)
            .finish()
    }
}

fn parse_positive(name: &'static str, raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(ConfigError::InvalidValue {
            name,
            value: raw.to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        Ok(value) => Ok(value),
        Err(e) => Err(ConfigError::InvalidValue {
            name,
            value: raw.to_string(),
            reason: e.to_string(),
        }),
    }
}
