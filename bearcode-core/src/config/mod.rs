//! Environment driven configuration: API key, model, and request policy.

pub mod api_keys;
pub mod constants;
pub mod types;

pub use api_keys::{DotenvStatus, load_dotenv, load_dotenv_from};
pub use types::{AgentConfig, BearConfig, ConfigError};
