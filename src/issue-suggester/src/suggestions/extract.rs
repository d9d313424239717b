//! Defensive extraction of suggestions from free-form model text.
//!
//! The model is asked to reply with a bare JSON array, but compliance is
//! best effort. Replies are scanned for the outermost bracketed array and any
//! Markdown code fences are removed before decoding.

use super::{ExtractError, IssueSuggestion};
use regex::Regex;
use std::sync::LazyLock;

/// First `[` through the last `]`, spanning newlines.
static ARRAY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\[.*\]").expect("array pattern is valid")
});

/// Triple-backtick fence with an optional language tag.
static FENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```[A-Za-z0-9_+-]*").expect("fence pattern is valid")
});

/// Parses issue suggestions out of a raw model reply.
///
/// # Errors
///
/// - [`ExtractError::Empty`] if the reply is blank.
/// - [`ExtractError::NonJson`] if no array can be located.
/// - [`ExtractError::Malformed`] if the located array fails to decode.
/// - [`ExtractError::MissingTitle`] if any suggestion has a blank title.
pub fn parse_suggestions(text: &str) -> Result<Vec<IssueSuggestion>, ExtractError> {
    let candidate = extract_json_array(text)?;
    let cleaned = strip_code_fences(candidate);
    let suggestions: Vec<IssueSuggestion> = serde_json::from_str(&cleaned)?;

    if let Some(index) = suggestions.iter().position(|s| s.title.trim().is_empty()) {
        return Err(ExtractError::MissingTitle { index });
    }

    Ok(suggestions)
}

/// Locates the JSON array candidate inside a reply.
///
/// Falls back to the whole trimmed text when it starts with `[` but has no
/// closing bracket, so truncated arrays are reported as malformed rather
/// than as prose.
pub(crate) fn extract_json_array(text: &str) -> Result<&str, ExtractError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ExtractError::Empty);
    }

    if let Some(found) = ARRAY_PATTERN.find(trimmed) {
        return Ok(found.as_str());
    }

    if trimmed.starts_with('[') {
        Ok(trimmed)
    } else {
        Err(ExtractError::NonJson)
    }
}

/// Removes every Markdown code fence marker.
pub(crate) fn strip_code_fences(text: &str) -> String {
    FENCE_PATTERN.replace_all(text, "").into_owned()
}
