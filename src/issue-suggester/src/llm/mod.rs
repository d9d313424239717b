//! LLM configuration and the generation client used for suggestions.

mod client;
mod config;
mod error;
mod gemini;

pub use client::{ContentRequest, ContentResponse, GenerationClient};
pub use config::LlmConfig;
pub use error::{GenerationError, LlmError};
pub use gemini::{GeminiClient, DEFAULT_BASE_URL};

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

const MODEL_ENV: &str = "ISSUE_SUGGESTER_LLM_MODEL";
const TEMPERATURE_ENV: &str = "ISSUE_SUGGESTER_LLM_TEMPERATURE";
const API_KEY_ENVS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Top-level structure for `config.toml` with a single `[llm]` section.
#[derive(Debug, Clone, Default, Deserialize)]
struct LlmConfigFile {
    /// LLM provider configuration.
    #[serde(default)]
    llm: LlmConfig,
}

/// Fully resolved LLM settings.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmSettings {
    /// Model name.
    pub model: String,
    /// API key, if one was found.
    pub api_key: Option<String>,
    /// API base URL.
    pub base_url: String,
    /// Optional request timeout.
    pub timeout: Option<Duration>,
    /// Optional sampling temperature.
    pub temperature: Option<f64>,
}

impl LlmSettings {
    /// Resolves settings from an optional config file and the environment.
    ///
    /// Precedence per field:
    /// - model: `ISSUE_SUGGESTER_LLM_MODEL` env var, config, [`DEFAULT_MODEL`]
    /// - temperature: `ISSUE_SUGGESTER_LLM_TEMPERATURE` env var, config
    /// - api key: config, `GEMINI_API_KEY`, `GOOGLE_API_KEY`
    #[must_use]
    pub fn resolve(config: Option<&LlmConfig>) -> Self {
        Self {
            model: resolve_model(config),
            api_key: resolve_api_key(config),
            base_url: config
                .and_then(|c| c.base_url.clone())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: config
                .and_then(|c| c.timeout_secs)
                .map(Duration::from_secs),
            temperature: resolve_temperature(config),
        }
    }

    /// Loads `config.toml` (if present) and resolves settings from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(config_path: &Path) -> Result<Self, LlmError> {
        let config = load_config(config_path)?;
        Ok(Self::resolve(config.as_ref()))
    }
}

/// Resolves the model name from environment, config or the default.
fn resolve_model(config: Option<&LlmConfig>) -> String {
    std::env::var(MODEL_ENV)
        .ok()
        .filter(|m| !m.trim().is_empty())
        .or_else(|| config.and_then(|c| c.model.clone()))
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}

/// Resolves the API key from config or environment.
///
/// Blank candidates are skipped so they never shadow a later source.
fn resolve_api_key(config: Option<&LlmConfig>) -> Option<String> {
    config
        .and_then(|c| c.api_key.clone())
        .filter(|key| is_present(key))
        .or_else(|| {
            API_KEY_ENVS
                .iter()
                .find_map(|var| std::env::var(var).ok().filter(|key| is_present(key)))
        })
}

fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Validates that a temperature value is finite and within 0.0-2.0.
fn validate_temperature(value: f64, source: &str) -> Option<f64> {
    if !value.is_finite() || !(0.0..=2.0).contains(&value) {
        tracing::warn!(
            "Invalid temperature {value} from {source}: must be finite and in range 0.0-2.0"
        );
        return None;
    }
    Some(value)
}

/// Resolves the temperature from environment or config.
///
/// Environment variable takes precedence over config file.
fn resolve_temperature(config: Option<&LlmConfig>) -> Option<f64> {
    if let Ok(val) = std::env::var(TEMPERATURE_ENV) {
        if let Ok(temp) = val.parse::<f64>() {
            return validate_temperature(temp, "environment variable");
        }
    }
    config
        .and_then(|c| c.temperature)
        .and_then(|t| validate_temperature(t, "config file"))
}

/// Loads the LLM config file if it exists.
///
/// # Errors
///
/// Returns [`LlmError::Io`] or [`LlmError::Toml`] if the file exists but
/// cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<Option<LlmConfig>, LlmError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path).map_err(|source| LlmError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let parsed: LlmConfigFile = toml::from_str(&contents).map_err(|source| LlmError::Toml {
        path: path.display().to_string(),
        source,
    })?;
    Ok(Some(parsed.llm))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(temp: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = temp.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        path
    }

    /// Runs `f` with every LLM env var unset except the given overrides.
    fn with_llm_env<F: FnOnce()>(overrides: &[(&str, &str)], f: F) {
        let vars: Vec<(&str, Option<&str>)> =
            [MODEL_ENV, TEMPERATURE_ENV, API_KEY_ENVS[0], API_KEY_ENVS[1]]
                .into_iter()
                .map(|key| {
                    let value = overrides.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);
                    (key, value)
                })
                .collect();
        temp_env::with_vars(vars, f);
    }

    #[test]
    fn load_config_returns_none_when_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.toml");
        let config = load_config(&path).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn load_config_parses_all_fields() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            r#"
[llm]
model = "gemini-2.0-flash"
api-key = "secret"
base-url = "http://localhost:9000"
timeout-secs = 30
temperature = 0.5
"#,
        );
        let config = load_config(&path).unwrap().unwrap();
        assert_eq!(config.model.as_deref(), Some("gemini-2.0-flash"));
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(config.timeout_secs, Some(30));
        assert_eq!(config.temperature, Some(0.5));
    }

    #[test]
    fn load_config_accepts_missing_llm_section() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "");
        let config = load_config(&path).unwrap().unwrap();
        assert_eq!(config, LlmConfig::default());
    }

    #[test]
    fn load_config_reports_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "not = [valid");
        let error = load_config(&path).unwrap_err();
        assert!(matches!(error, LlmError::Toml { .. }));
    }

    #[test]
    fn resolve_uses_defaults_without_config_or_env() {
        with_llm_env(&[], || {
            let settings = LlmSettings::resolve(None);
            assert_eq!(settings.model, DEFAULT_MODEL);
            assert_eq!(settings.api_key, None);
            assert_eq!(settings.base_url, DEFAULT_BASE_URL);
            assert_eq!(settings.timeout, None);
            assert_eq!(settings.temperature, None);
        });
    }

    #[test]
    fn resolve_uses_config_values() {
        with_llm_env(&[], || {
            let config = LlmConfig {
                model: Some("gemini-2.0-flash".to_string()),
                api_key: Some("secret".to_string()),
                base_url: None,
                timeout_secs: Some(45),
                temperature: Some(0.3),
            };
            let settings = LlmSettings::resolve(Some(&config));
            assert_eq!(settings.model, "gemini-2.0-flash");
            assert_eq!(settings.api_key.as_deref(), Some("secret"));
            assert_eq!(settings.timeout, Some(Duration::from_secs(45)));
            assert_eq!(settings.temperature, Some(0.3));
        });
    }

    #[test]
    fn resolve_prefers_env_model_and_temperature() {
        with_llm_env(&[(MODEL_ENV, "gemini-pro"), (TEMPERATURE_ENV, "0.8")], || {
            let config = LlmConfig {
                model: Some("gemini-2.0-flash".to_string()),
                temperature: Some(0.3),
                ..LlmConfig::default()
            };
            let settings = LlmSettings::resolve(Some(&config));
            assert_eq!(settings.model, "gemini-pro");
            assert_eq!(settings.temperature, Some(0.8));
        });
    }

    #[test]
    fn resolve_reads_api_key_from_env() {
        with_llm_env(&[("GOOGLE_API_KEY", "from-google")], || {
            assert_eq!(
                LlmSettings::resolve(None).api_key.as_deref(),
                Some("from-google")
            );
        });
    }

    #[test]
    fn config_api_key_wins_over_env() {
        with_llm_env(&[("GEMINI_API_KEY", "from-env")], || {
            let config = LlmConfig {
                api_key: Some("from-config".to_string()),
                ..LlmConfig::default()
            };
            assert_eq!(
                resolve_api_key(Some(&config)).as_deref(),
                Some("from-config")
            );
        });
    }

    #[test]
    fn blank_config_api_key_falls_back_to_env() {
        with_llm_env(&[("GEMINI_API_KEY", "from-env")], || {
            let config = LlmConfig {
                api_key: Some("  ".to_string()),
                ..LlmConfig::default()
            };
            assert_eq!(
                resolve_api_key(Some(&config)).as_deref(),
                Some("from-env")
            );
        });
    }

    #[test]
    fn blank_gemini_key_falls_back_to_google_key() {
        with_llm_env(
            &[("GEMINI_API_KEY", ""), ("GOOGLE_API_KEY", "from-google")],
            || {
                assert_eq!(resolve_api_key(None).as_deref(), Some("from-google"));
            },
        );
    }

    #[test]
    fn blank_keys_everywhere_resolve_to_none() {
        with_llm_env(&[("GEMINI_API_KEY", " "), ("GOOGLE_API_KEY", "")], || {
            let config = LlmConfig {
                api_key: Some(String::new()),
                ..LlmConfig::default()
            };
            assert_eq!(resolve_api_key(Some(&config)), None);
        });
    }

    #[test]
    fn resolve_ignores_out_of_range_temperature() {
        with_llm_env(&[(TEMPERATURE_ENV, "7.5")], || {
            assert_eq!(resolve_temperature(None), None);
        });
    }
}
