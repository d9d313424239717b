//! Repository URL parsing.
//!
//! Turns a user supplied URL into a [`RepositoryIdentity`]. Parsing is pure:
//! no network access is performed and the same input always yields the same
//! output.

mod identity;

pub use identity::RepositoryIdentity;

use url::Url;

/// The only host accepted for repository URLs.
const GITHUB_HOST: &str = "github.com";

/// Parses a GitHub repository URL into its owner and name.
///
/// The input must be an absolute URL whose host is exactly `github.com` and
/// whose path has at least two non-empty segments. Segments are taken
/// verbatim, so `https://github.com/octocat/Hello-World/tree/main` yields
/// `octocat/Hello-World`.
///
/// Returns [`None`] for anything else; callers treat that as invalid input.
#[must_use]
pub fn parse_repository_url(input: &str) -> Option<RepositoryIdentity> {
    let url = Url::parse(input).ok()?;
    if url.host_str() != Some(GITHUB_HOST) {
        return None;
    }

    let mut segments = url.path().split('/').filter(|s| !s.is_empty());
    let owner = segments.next()?;
    let name = segments.next()?;

    Some(RepositoryIdentity {
        owner: owner.to_string(),
        name: name.to_string(),
    })
}
