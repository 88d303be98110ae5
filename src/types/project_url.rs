//! Project board URL classification.
//!
//! GitHub's projects API has no "look up by URL" endpoint. A board can belong to
//! a repository, an organization or a user, and each owner uses a different
//! listing endpoint, so the URL shape decides which endpoint to search.
//!
//! Supported shapes:
//!
//! - `https://github.com/<owner>/<repo>/projects/<n>` (repository)
//! - `https://github.com/orgs/<org>/projects/<n>` (organization)
//! - `https://github.com/users/<user>/projects/<n>` (user)

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::error::ProjectError;

static USER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https://github\.com/users/.+/projects/[0-9]").expect("valid regex")
});
static ORG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https://github\.com/orgs/.+/projects/[0-9]").expect("valid regex")
});
static REPO_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https://github\.com/.+/.+/projects/[0-9]").expect("valid regex")
});

/// Who owns a project board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectScope {
    Repository,
    Organization,
    User,
}

impl fmt::Display for ProjectScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProjectScope::Repository => "repository",
            ProjectScope::Organization => "organization",
            ProjectScope::User => "user",
        };
        f.write_str(s)
    }
}

/// Determines the owner scope of a project board URL.
///
/// The user and organization shapes are checked first: the repository pattern
/// also matches `/users/x/projects/1` and `/orgs/x/projects/1`.
pub fn classify(url: &str) -> Result<ProjectScope, ProjectError> {
    if url.is_empty() {
        return Err(ProjectError::invalid_input("GITHUB_PROJECT_URL is empty"));
    }

    let is_user = USER_PATTERN.is_match(url);
    let is_org = ORG_PATTERN.is_match(url);

    if is_user {
        Ok(ProjectScope::User)
    } else if is_org {
        Ok(ProjectScope::Organization)
    } else if REPO_PATTERN.is_match(url) {
        Ok(ProjectScope::Repository)
    } else {
        Err(ProjectError::invalid_input(format!(
            "GITHUB_PROJECT_URL is an invalid URL: {url}"
        )))
    }
}

/// The first two path segments of a project URL.
///
/// For a repository board these are the owner and repository name. For
/// organization and user boards the first segment is the literal `orgs` or
/// `users` and the second is the account name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerPath {
    pub parent_resource: String,
    pub parent_name: String,
}

/// Extracts the owner path segments from a project URL.
pub fn extract_owner_path(url: &str) -> Result<OwnerPath, ProjectError> {
    let parsed = Url::parse(url)
        .map_err(|e| ProjectError::invalid_input(format!("Failed to parse URL {url}: {e}")))?;

    let mut segments = parsed
        .path_segments()
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty());

    match (segments.next(), segments.next()) {
        (Some(resource), Some(name)) => Ok(OwnerPath {
            parent_resource: resource.to_string(),
            parent_name: name.to_string(),
        }),
        _ => Err(ProjectError::invalid_input(format!(
            "Project URL {url} does not contain an owner and name"
        ))),
    }
}
