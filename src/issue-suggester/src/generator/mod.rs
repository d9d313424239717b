//! Issue suggestion generation.
//!
//! A generation call moves through `Validating -> Dispatching ->
//! ExtractingJSON` and ends either with a list of suggestions or a single
//! classified [`SuggestionError`]. Exactly one request is sent to the
//! generation client per call; retries are left to the caller.

mod error;
mod request;

pub use error::SuggestionError;
pub use request::GenerationRequest;

use crate::llm::{ContentRequest, GenerationClient, GenerationError, DEFAULT_MODEL};
use crate::prompts::{PromptRenderer, TemplateError};
use crate::repository::parse_repository_url;
use crate::suggestions::{parse_suggestions, ExtractError, IssueSuggestion};
use tracing::{debug, error, info, info_span, warn, Instrument};

/// Status codes that mean the service refused the request itself.
const CLIENT_REJECTION_STATUSES: [u16; 3] = [400, 403, 404];

/// Generates issue suggestions for GitHub repositories.
pub struct SuggestionGenerator<C> {
    client: C,
    model: String,
    renderer: PromptRenderer,
}

impl<C: GenerationClient> SuggestionGenerator<C> {
    /// Creates a generator that dispatches through `client` using the default model.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in prompt template fails to compile.
    pub fn new(client: C) -> Result<Self, TemplateError> {
        Ok(Self {
            client,
            model: DEFAULT_MODEL.to_string(),
            renderer: PromptRenderer::new()?,
        })
    }

    /// Sets the model name sent with each request.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Returns the configured model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the underlying generation client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Generates issue suggestions for a repository.
    ///
    /// # Errors
    ///
    /// - [`SuggestionError::InvalidInput`] if the URL is not a GitHub repository
    ///   URL; the client is not called.
    /// - [`SuggestionError::EmptyResponse`], [`SuggestionError::NonJsonResponse`]
    ///   or [`SuggestionError::MalformedResponse`] if the reply is unusable.
    /// - [`SuggestionError::AccessDenied`], [`SuggestionError::Configuration`]
    ///   or [`SuggestionError::GenerationFailed`] if the client call fails.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<IssueSuggestion>, SuggestionError> {
        let span = info_span!(
            "generate_suggestions",
            repo_url = %request.repo_url,
            scan_todos = request.scan_todos
        );

        async {
            debug!("Validating repository URL");
            let identity = parse_repository_url(&request.repo_url).ok_or_else(|| {
                SuggestionError::InvalidInput {
                    url: request.repo_url.clone(),
                }
            })?;

            let prompt = self.renderer.render_suggestion_prompt(
                &request.repo_url,
                &identity,
                request.project_goals.as_deref(),
                request.scan_todos,
            )?;

            info!(repo = %identity, model = %self.model, "Dispatching generation request");
            let response = self
                .client
                .generate_content(ContentRequest {
                    model: self.model.clone(),
                    prompt,
                    web_search: true,
                })
                .await
                .map_err(classify_transport_error)?;

            debug!("Extracting suggestions from response");
            let text = response.text.unwrap_or_default();
            let suggestions =
                parse_suggestions(&text).map_err(|e| classify_extract_error(e, text.clone()))?;

            info!(count = suggestions.len(), "Generated suggestions");
            Ok(suggestions)
        }
        .instrument(span)
        .await
    }
}

/// Maps a client failure onto the suggestion error taxonomy.
fn classify_transport_error(error: GenerationError) -> SuggestionError {
    error!(error = %error, "Generation request failed");
    let message = error.to_string();

    if matches!(error, GenerationError::MissingCredential) {
        return SuggestionError::Configuration { message };
    }

    match error.status() {
        Some(status) if CLIENT_REJECTION_STATUSES.contains(&status) => {
            SuggestionError::AccessDenied { message }
        }
        _ => SuggestionError::GenerationFailed { message },
    }
}

/// Maps an extraction failure onto the suggestion error taxonomy.
fn classify_extract_error(error: ExtractError, raw: String) -> SuggestionError {
    match error {
        ExtractError::Empty => SuggestionError::EmptyResponse,
        ExtractError::NonJson => {
            warn!(raw = %raw, "AI returned non-JSON response");
            SuggestionError::NonJsonResponse { raw }
        }
        source @ (ExtractError::Malformed(_) | ExtractError::MissingTitle { .. }) => {
            error!(error = %source, raw = %raw, "Failed to parse AI response");
            SuggestionError::MalformedResponse { raw, source }
        }
    }
}
