#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod generator;
pub mod llm;
pub mod prompts;
pub mod repository;
pub mod runner;
pub mod suggestions;
pub mod summary;

pub use generator::{GenerationRequest, SuggestionError, SuggestionGenerator};
pub use llm::{
    load_config, ContentRequest, ContentResponse, GeminiClient, GenerationClient,
    GenerationError, LlmConfig, LlmError, LlmSettings, DEFAULT_MODEL,
};
pub use prompts::{PromptRenderer, TemplateError};
pub use repository::{parse_repository_url, RepositoryIdentity};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use suggestions::{parse_suggestions, ExtractError, IssueSuggestion, IssueType};
pub use summary::{ProcessingResult, RunSummary};
