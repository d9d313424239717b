//! Suggestion generation error types.

use crate::prompts::TemplateError;
use thiserror::Error;

/// Errors that can occur while generating issue suggestions.
///
/// Display messages are meant for end users; raw model output is kept in the
/// variants for diagnostics but never rendered.
#[derive(Debug, Error)]
pub enum SuggestionError {
    /// The URL is not a GitHub repository URL. No request was sent.
    #[error("Invalid GitHub URL: {url}")]
    InvalidInput { url: String },

    /// The generation service returned no text.
    #[error("No data received from AI")]
    EmptyResponse,

    /// The model replied with prose instead of a JSON array.
    #[error(
        "The AI provided a text response instead of specific issues. This usually happens for new or unindexed repositories. Please try again."
    )]
    NonJsonResponse { raw: String },

    /// A JSON-looking array was found but could not be decoded.
    #[error("Failed to parse AI response. Please try again.")]
    MalformedResponse {
        raw: String,
        #[source]
        source: crate::suggestions::ExtractError,
    },

    /// The service rejected the request; the repository may be private.
    #[error("AI request failed. The repository might be private or inaccessible. ({message})")]
    AccessDenied { message: String },

    /// Any other transport or service failure.
    #[error("Failed to generate suggestions: {message}")]
    GenerationFailed { message: String },

    /// The generation client is not configured (e.g. missing API key).
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// The prompt template could not be rendered.
    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl SuggestionError {
    /// Returns true if retrying the same request may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::EmptyResponse
                | Self::NonJsonResponse { .. }
                | Self::MalformedResponse { .. }
                | Self::GenerationFailed { .. }
        )
    }
}
