//! Runs suggestion generation for many repositories.

mod config;
mod error;

pub use config::{RunnerConfig, DEFAULT_CONCURRENCY};
pub use error::RunnerError;

use crate::generator::{GenerationRequest, SuggestionGenerator};
use crate::llm::{GeminiClient, GenerationClient, LlmError, LlmSettings};
use crate::summary::{ProcessingResult, RunSummary};
use futures::stream::{self, StreamExt};
use tracing::{error, info};

/// Generates suggestions for a batch of independent requests.
pub struct Runner<C> {
    generator: SuggestionGenerator<C>,
    concurrency: usize,
}

impl Runner<GeminiClient> {
    /// Builds a Gemini-backed runner from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the LLM config cannot be loaded or the client
    /// cannot be built. A missing API key is not an error here; it surfaces on
    /// the first request.
    pub fn from_config(config: &RunnerConfig) -> Result<Self, RunnerError> {
        let mut settings = LlmSettings::load(config.llm_config_path())?;
        if let Some(model) = config.model() {
            settings.model = model.to_string();
        }
        if let Some(api_key) = config.api_key().filter(|key| !key.trim().is_empty()) {
            settings.api_key = Some(api_key.to_string());
        }

        info!(model = %settings.model, "Using Gemini model");
        let client = GeminiClient::from_settings(&settings).map_err(LlmError::from)?;
        let generator = SuggestionGenerator::new(client)?.with_model(settings.model);
        Ok(Self::new(generator, config.concurrency()))
    }
}

impl<C: GenerationClient> Runner<C> {
    /// Creates a runner around an existing generator.
    pub fn new(generator: SuggestionGenerator<C>, concurrency: usize) -> Self {
        Self {
            generator,
            concurrency: concurrency.max(1),
        }
    }

    /// Returns the underlying generator.
    pub fn generator(&self) -> &SuggestionGenerator<C> {
        &self.generator
    }

    /// Processes every request and summarizes the outcomes.
    ///
    /// Requests are independent: a failure for one repository is recorded and
    /// does not stop the others. Results keep the order of `requests`.
    pub async fn run(&self, requests: Vec<GenerationRequest>) -> RunSummary {
        info!(
            count = requests.len(),
            concurrency = self.concurrency,
            "Generating suggestions"
        );

        let results: Vec<ProcessingResult> = stream::iter(requests)
            .map(|request| async move { self.process(request).await })
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut summary = RunSummary::new();
        for result in results {
            summary.record_result(result);
        }
        summary
    }

    async fn process(&self, request: GenerationRequest) -> ProcessingResult {
        match self.generator.generate(&request).await {
            Ok(suggestions) => ProcessingResult::Success {
                repository: request.repo_url,
                suggestions,
            },
            Err(e) => {
                error!(repo_url = %request.repo_url, error = %e, "Failed to generate suggestions");
                ProcessingResult::Failed {
                    retryable: e.is_retryable(),
                    error: e.to_string(),
                    repository: request.repo_url,
                }
            }
        }
    }
}
