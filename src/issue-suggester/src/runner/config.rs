//! Runner configuration.

use std::path::{Path, PathBuf};

/// Default number of repositories processed at once.
pub const DEFAULT_CONCURRENCY: usize = 3;

/// Configuration for a suggestion run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the LLM config file.
    llm_config_path: PathBuf,
    /// Model override taking precedence over config and environment.
    model: Option<String>,
    /// API key override taking precedence over config and environment.
    api_key: Option<String>,
    /// Maximum concurrent generation requests.
    concurrency: usize,
}

impl RunnerConfig {
    /// Creates a new configuration reading LLM settings from `llm_config_path`.
    pub fn new(llm_config_path: PathBuf) -> Self {
        Self {
            llm_config_path,
            model: None,
            api_key: None,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Sets a model override.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets an API key override.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the maximum number of concurrent requests. Zero is treated as one.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Returns the LLM config file path.
    pub fn llm_config_path(&self) -> &Path {
        &self.llm_config_path
    }

    /// Returns the model override.
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Returns the API key override.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Returns the max concurrent requests.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }
}
