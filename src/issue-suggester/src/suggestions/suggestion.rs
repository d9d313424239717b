//! Issue suggestion types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Classification of a suggested issue.
///
/// Decoding is case-insensitive. Strings outside the four known categories,
/// `null` and non-string values become [`IssueType::Unclassified`] instead of
/// failing the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<Value>")]
pub enum IssueType {
    /// Something is broken.
    Bug,
    /// New functionality.
    Feature,
    /// Internal restructuring without behavior change.
    Refactor,
    /// Documentation improvements.
    Documentation,
    /// The model returned a type outside the known categories, or none at all.
    #[default]
    Unclassified,
}

impl IssueType {
    /// Returns the display name of the issue type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bug => "Bug",
            Self::Feature => "Feature",
            Self::Refactor => "Refactor",
            Self::Documentation => "Documentation",
            Self::Unclassified => "Unclassified",
        }
    }
}

impl From<String> for IssueType {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "bug" => Self::Bug,
            "feature" => Self::Feature,
            "refactor" => Self::Refactor,
            "documentation" => Self::Documentation,
            _ => Self::Unclassified,
        }
    }
}

impl From<Option<Value>> for IssueType {
    fn from(value: Option<Value>) -> Self {
        match value {
            Some(Value::String(name)) => Self::from(name),
            _ => Self::Unclassified,
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single proposed issue for a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSuggestion {
    /// Issue title. Never blank.
    pub title: String,

    /// Issue body in GitHub-flavored Markdown.
    #[serde(default)]
    pub body: String,

    /// Issue classification.
    #[serde(rename = "type", default)]
    pub kind: IssueType,

    /// Short rationale for the suggestion.
    #[serde(default)]
    pub reasoning: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_type_is_case_insensitive() {
        assert_eq!(IssueType::from("bug".to_string()), IssueType::Bug);
        assert_eq!(IssueType::from(" FEATURE ".to_string()), IssueType::Feature);
        assert_eq!(IssueType::from("Refactor".to_string()), IssueType::Refactor);
        assert_eq!(
            IssueType::from("documentation".to_string()),
            IssueType::Documentation
        );
    }

    #[test]
    fn unknown_issue_type_is_unclassified() {
        assert_eq!(IssueType::from("Chore".to_string()), IssueType::Unclassified);
        assert_eq!(IssueType::from(String::new()), IssueType::Unclassified);
    }

    #[test]
    fn serializes_with_type_key() {
        let suggestion = IssueSuggestion {
            title: "Add CI".to_string(),
            body: "Set up GitHub Actions.".to_string(),
            kind: IssueType::Feature,
            reasoning: "No CI exists.".to_string(),
        };

        let value = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(value["type"], "Feature");
        assert_eq!(value["title"], "Add CI");
    }

    #[test]
    fn missing_optional_fields_default() {
        let suggestion: IssueSuggestion =
            serde_json::from_str(r#"{"title": "Add a README", "extra": 1}"#).unwrap();
        assert_eq!(suggestion.body, "");
        assert_eq!(suggestion.reasoning, "");
        assert_eq!(suggestion.kind, IssueType::Unclassified);
    }

    #[test]
    fn null_or_non_string_type_is_unclassified() {
        let parsed: Vec<IssueSuggestion> = serde_json::from_str(
            r#"[
                {"title": "A", "type": null},
                {"title": "B", "type": 3},
                {"title": "C", "type": ["Bug"]},
                {"title": "D", "type": "bug"}
            ]"#,
        )
        .unwrap();
        let kinds: Vec<IssueType> = parsed.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            [
                IssueType::Unclassified,
                IssueType::Unclassified,
                IssueType::Unclassified,
                IssueType::Bug,
            ]
        );
    }
}
