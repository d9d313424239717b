//! Generation client abstraction.

use super::GenerationError;
use std::future::Future;

/// A single content generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRequest {
    /// Model name to generate with.
    pub model: String,

    /// Prompt text.
    pub prompt: String,

    /// Whether web-search grounding is enabled for this call.
    pub web_search: bool,
}

/// Raw text returned by a generation call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentResponse {
    /// Generated text, if the service produced any.
    pub text: Option<String>,
}

/// A hosted model capable of grounded text generation.
///
/// Implementations are treated as black boxes: latency, availability and
/// compliance with formatting directives in the prompt are not assumed.
pub trait GenerationClient: Send + Sync {
    /// Sends one request and waits for the reply.
    fn generate_content(
        &self,
        request: ContentRequest,
    ) -> impl Future<Output = Result<ContentResponse, GenerationError>> + Send;
}
