//! LLM provider configuration.

use serde::Deserialize;

/// Gemini configuration parsed from the `[llm]` section of `config.toml`.
///
/// Every field is optional; unset fields fall back to environment variables
/// or built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LlmConfig {
    /// Model name (e.g., "gemini-2.5-flash").
    pub model: Option<String>,

    /// API key (optional, falls back to GEMINI_API_KEY / GOOGLE_API_KEY env vars).
    pub api_key: Option<String>,

    /// Base URL of the Gemini API (optional).
    pub base_url: Option<String>,

    /// Request timeout in seconds (optional).
    pub timeout_secs: Option<u64>,

    /// Sampling temperature (optional).
    pub temperature: Option<f64>,
}
