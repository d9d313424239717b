//! Issue suggestions and their extraction from model replies.

mod error;
mod extract;
mod suggestion;

pub use error::ExtractError;
pub use extract::parse_suggestions;
pub use suggestion::{IssueSuggestion, IssueType};
