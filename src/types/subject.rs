//! The issue or pull request that triggered a run.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ProjectError;

use super::ids::{ContentId, IssueNumber, RepoId};

/// The kind of content a project card links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    Issue,
    PullRequest,
}

impl ContentType {
    /// Returns the `content_type` string the card creation endpoint expects.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            ContentType::Issue => "Issue",
            ContentType::PullRequest => "PullRequest",
        }
    }
}

/// An opened issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSubject {
    pub id: ContentId,
    pub number: IssueNumber,
    /// The issue's REST URL, e.g. `https://api.github.com/repos/o/r/issues/1`.
    pub api_url: String,
}

impl IssueSubject {
    /// Derives the repository from the issue's API URL.
    ///
    /// The owner and name are the second and third path segments
    /// (`/repos/<owner>/<repo>/...`).
    pub fn repo(&self) -> Result<RepoId, ProjectError> {
        let parsed = Url::parse(&self.api_url).map_err(|e| {
            ProjectError::invalid_input(format!("Failed to parse issue URL {}: {e}", self.api_url))
        })?;

        let segments: Vec<&str> = parsed
            .path_segments()
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [_, owner, repo, ..] => Ok(RepoId::new(*owner, *repo)),
            _ => Err(ProjectError::invalid_input(format!(
                "Issue URL {} does not contain an owner and repository",
                self.api_url
            ))),
        }
    }
}

/// A pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestSubject {
    pub id: ContentId,
    pub number: IssueNumber,
}

/// The issue or pull request a card should be filed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventSubject {
    Issue(IssueSubject),
    PullRequest(PullRequestSubject),
}

impl EventSubject {
    pub fn content_id(&self) -> ContentId {
        match self {
            EventSubject::Issue(issue) => issue.id,
            EventSubject::PullRequest(pr) => pr.id,
        }
    }

    pub fn content_type(&self) -> ContentType {
        match self {
            EventSubject::Issue(_) => ContentType::Issue,
            EventSubject::PullRequest(_) => ContentType::PullRequest,
        }
    }
}
