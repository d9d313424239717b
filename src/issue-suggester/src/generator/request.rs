//! Generation request.

/// Input for a single suggestion generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Repository URL as supplied by the user.
    pub repo_url: String,

    /// Optional project goals that at least one suggestion should align with.
    pub project_goals: Option<String>,

    /// Whether to look for TODO/FIXME/HACK markers in the repository.
    pub scan_todos: bool,
}

impl GenerationRequest {
    /// Creates a request for a repository with no goals and no TODO scan.
    pub fn new(repo_url: impl Into<String>) -> Self {
        Self {
            repo_url: repo_url.into(),
            project_goals: None,
            scan_todos: false,
        }
    }

    /// Sets the project goals.
    #[must_use]
    pub fn with_project_goals(mut self, project_goals: impl Into<String>) -> Self {
        self.project_goals = Some(project_goals.into());
        self
    }

    /// Enables or disables the TODO scan.
    #[must_use]
    pub fn with_scan_todos(mut self, scan_todos: bool) -> Self {
        self.scan_todos = scan_todos;
        self
    }
}
