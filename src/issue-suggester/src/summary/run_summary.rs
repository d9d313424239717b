//! Run summary types.

use super::result::ProcessingResult;
use serde::Serialize;

/// Summary of a complete run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    /// Number of repositories processed.
    pub repositories_processed: usize,

    /// Number of repositories that produced suggestions.
    pub repositories_succeeded: usize,

    /// Number of repositories that failed.
    pub repositories_failed: usize,

    /// Total number of suggestions generated.
    pub suggestions_generated: usize,

    /// Per-repository outcomes, in request order.
    pub results: Vec<ProcessingResult>,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the summary with a processing result.
    pub fn record_result(&mut self, result: ProcessingResult) {
        self.repositories_processed += 1;
        match &result {
            ProcessingResult::Success { suggestions, .. } => {
                self.repositories_succeeded += 1;
                self.suggestions_generated += suggestions.len();
            }
            ProcessingResult::Failed { .. } => self.repositories_failed += 1,
        }
        self.results.push(result);
    }

    /// Returns true if any failures occurred.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.repositories_failed > 0
    }

    /// Returns true if all operations were successful.
    #[must_use]
    pub fn all_success(&self) -> bool {
        self.repositories_failed == 0
    }
}
