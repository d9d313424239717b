//! Prompt rendering using Handlebars.
//!
//! The suggestion prompt is a Handlebars template compiled once into the
//! renderer. Rendering is deterministic for a given set of inputs.

mod error;

pub use error::TemplateError;

use crate::repository::RepositoryIdentity;
use handlebars::{no_escape, Handlebars};
use serde_json::json;

const SUGGESTION_PROMPT: &str = "suggestion-prompt";
const SUGGESTION_PROMPT_TEMPLATE: &str = include_str!("suggestion-prompt.hbs");

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (prompts are plain text)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs
}

/// Renders prompts sent to the generation client.
pub struct PromptRenderer {
    handlebars: Handlebars<'static>,
}

impl PromptRenderer {
    /// Creates a renderer with the built-in suggestion prompt registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded template fails to compile.
    pub fn new() -> Result<Self, TemplateError> {
        let mut handlebars = create_handlebars_registry();
        handlebars.register_template_string(SUGGESTION_PROMPT, SUGGESTION_PROMPT_TEMPLATE)?;
        Ok(Self { handlebars })
    }

    /// Renders the issue suggestion prompt.
    ///
    /// # Arguments
    ///
    /// * `repo_url` - Repository URL as supplied by the user
    /// * `identity` - Parsed owner and name, used in search queries
    /// * `project_goals` - Optional goals; ignored when blank
    /// * `scan_todos` - Whether to steer the model toward TODO/FIXME/HACK markers
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_suggestion_prompt(
        &self,
        repo_url: &str,
        identity: &RepositoryIdentity,
        project_goals: Option<&str>,
        scan_todos: bool,
    ) -> Result<String, TemplateError> {
        let goals = project_goals.filter(|g| !g.trim().is_empty());
        let data = json!({
            "repo_url": repo_url,
            "owner": identity.owner,
            "name": identity.name,
            "has_project_goals": goals.is_some(),
            "project_goals": goals.unwrap_or(""),
            "scan_todos": scan_todos,
        });

        Ok(self.handlebars.render(SUGGESTION_PROMPT, &data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> RepositoryIdentity {
        RepositoryIdentity {
            owner: "octocat".to_string(),
            name: "Hello-World".to_string(),
        }
    }

    fn render(goals: Option<&str>, scan_todos: bool) -> String {
        PromptRenderer::new()
            .unwrap()
            .render_suggestion_prompt(
                "https://github.com/octocat/Hello-World",
                &identity(),
                goals,
                scan_todos,
            )
            .unwrap()
    }

    #[test]
    fn embeds_repository_and_issue_search() {
        let prompt = render(None, false);
        assert!(prompt.contains("https://github.com/octocat/Hello-World"));
        assert!(prompt.contains("issues site:github.com/octocat/Hello-World"));
        assert!(prompt.contains("Suggest exactly 3 distinct issues"));
        assert!(!prompt.contains("\"FIXME\""));
    }

    #[test]
    fn scan_todos_adds_marker_search() {
        let prompt = render(None, true);
        assert!(prompt.contains(r#"look for "TODO", "FIXME" or "HACK" comments"#));
        assert!(prompt.contains(r#"site:github.com/octocat/Hello-World "TODO""#));
        assert!(!prompt.contains("Suggest exactly 3 distinct issues"));
    }

    #[test]
    fn goals_are_embedded_verbatim() {
        let goals = r#"Improve <accessibility> & "mobile" support"#;
        let prompt = render(Some(goals), false);
        assert!(prompt.contains(goals));
        assert!(prompt.contains("at least one suggested issue aligns directly"));
    }

    #[test]
    fn blank_goals_are_ignored() {
        let prompt = render(Some("   "), false);
        assert!(!prompt.contains("Project Goals"));
    }

    #[test]
    fn mandates_fallback_and_output_format() {
        let prompt = render(None, false);
        assert!(prompt.contains("DO NOT refuse to answer"));
        assert!(prompt.contains("Set up GitHub Actions for CI"));
        assert!(prompt.contains("Do not wrap the JSON in markdown code blocks"));
        assert!(prompt.contains("\"reasoning\": \"Reasoning here\""));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render(Some("speed"), true), render(Some("speed"), true));
    }
}
