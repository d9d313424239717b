//! Runner error types.

/// Errors that can occur while setting up a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// LLM configuration loading or client construction errors.
    #[error(transparent)]
    Llm(#[from] crate::llm::LlmError),

    /// Prompt template compilation errors.
    #[error(transparent)]
    Template(#[from] crate::prompts::TemplateError),
}
