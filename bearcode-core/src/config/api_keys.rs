//! API key retrieval from environment variables and `.env` files.
//!
//! Only the OpenAI key is supported. Lookups go through a caller supplied function so the
//! resolver can be exercised without touching the process environment.

use crate::config::constants::env;
use crate::config::types::ConfigError;
use std::path::{Path, PathBuf};

/// Outcome of looking for a `.env` file.
///
/// `.env` is read before logging is set up (it may carry `RUST_LOG`), so the outcome is
/// kept and reported later with [`DotenvStatus::log`].
#[derive(Debug)]
pub enum DotenvStatus {
    Loaded(PathBuf),
    NotFound,
    Invalid(dotenvy::Error),
}

impl DotenvStatus {
    fn from_error(err: dotenvy::Error) -> Self {
        if err.not_found() {
            DotenvStatus::NotFound
        } else {
            DotenvStatus::Invalid(err)
        }
    }

    pub fn log(&self) {
        match self {
            DotenvStatus::Loaded(path) => {
                tracing::debug!(path = %path.display(), "loaded environment variables from .env");
            }
            DotenvStatus::NotFound => {}
            DotenvStatus::Invalid(e) => {
                tracing::warn!(error = %e, "failed to load .env file");
            }
        }
    }
}

/// Load environment variables from a `.env` file in the current directory or a parent.
///
/// A missing file is not an error. A file that cannot be parsed is reported and otherwise
/// ignored.
pub fn load_dotenv() -> DotenvStatus {
    match dotenvy::dotenv() {
        Ok(path) => DotenvStatus::Loaded(path),
        Err(e) => DotenvStatus::from_error(e),
    }
}

/// Load environment variables from a specific file
pub fn load_dotenv_from(path: &Path) -> DotenvStatus {
    match dotenvy::from_path(path) {
        Ok(()) => DotenvStatus::Loaded(path.to_path_buf()),
        Err(e) => DotenvStatus::from_error(e),
    }
}

/// Read a variable through `lookup`, treating empty values as unset.
pub fn non_empty<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|value| !value.trim().is_empty())
}

/// Resolve the OpenAI API key.
///
/// # Returns
///
/// * `Ok(String)` - The API key if found
/// * `Err(ConfigError::MissingApiKey)` - If the variable is unset or empty
pub fn get_openai_api_key<F>(lookup: &F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup, env::OPENAI_API_KEY).ok_or(ConfigError::MissingApiKey)
}
