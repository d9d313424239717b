//! Response extraction error types.

use thiserror::Error;

/// Errors that can occur while extracting suggestions from a model reply.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The reply contained no text.
    #[error("Response was empty")]
    Empty,

    /// The reply was prose rather than a JSON array.
    #[error("Response did not contain a JSON array")]
    NonJson,

    /// A JSON-looking array was found but could not be decoded.
    #[error("Failed to decode JSON array: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A decoded suggestion had a blank title.
    #[error("Suggestion at index {index} has an empty title")]
    MissingTitle { index: usize },
}
