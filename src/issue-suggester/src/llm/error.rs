//! LLM error types.

use thiserror::Error;

/// Errors that can occur while loading LLM configuration or building a client.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Failed to read LLM config file.
    #[error("Failed to read LLM config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse LLM config file.
    #[error("Failed to parse LLM config '{path}': {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Failed to build the HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Errors reported by a generation client for a single dispatch.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No credential was configured for the generation service.
    #[error("No API key configured; set GEMINI_API_KEY or api-key in config.toml")]
    MissingCredential,

    /// The request could not be sent or the response could not be read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Generation service returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The service answered with a body that is not a generation response.
    #[error("Failed to decode generation response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GenerationError {
    /// Returns the HTTP status code attached to the failure, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::MissingCredential | Self::Decode(_) => None,
        }
    }
}
