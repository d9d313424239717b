//! Processing result types.

use crate::suggestions::IssueSuggestion;
use serde::Serialize;

/// Result of generating suggestions for a single repository.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProcessingResult {
    /// Generation succeeded.
    Success {
        /// Repository URL as requested.
        repository: String,
        /// Generated suggestions.
        suggestions: Vec<IssueSuggestion>,
    },

    /// Generation failed.
    Failed {
        /// Repository URL as requested.
        repository: String,
        /// Error message.
        error: String,
        /// Whether retrying the same request may succeed.
        retryable: bool,
    },
}

impl ProcessingResult {
    /// Returns the repository URL this result belongs to.
    #[must_use]
    pub fn repository(&self) -> &str {
        match self {
            Self::Success { repository, .. } | Self::Failed { repository, .. } => repository,
        }
    }
}
