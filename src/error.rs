//! Failure taxonomy for a run.
//!
//! Every component returns a `ProjectError` to its caller; only the entry point
//! turns one into a log line and an exit code.

use thiserror::Error;

use crate::github::GitHubApiError;

/// The category of a [`ProjectError`], for inspection by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    Unsupported,
    RateLimited,
    RemoteFailure,
}

#[derive(Debug, Error)]
pub enum ProjectError {
    /// Missing or malformed configuration, URL or payload value.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A board, column or project absent from the remote listing.
    #[error("not found: {0}")]
    NotFound(String),

    /// User-owned project boards.
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// GitHub signalled throttling.
    #[error("Hit GitHub API rate limit")]
    RateLimited(#[source] GitHubApiError),

    /// Any other transport failure or unexpected status.
    #[error("{message}")]
    RemoteFailure {
        message: String,
        #[source]
        source: Option<GitHubApiError>,
    },
}

impl ProjectError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ProjectError::InvalidInput(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ProjectError::NotFound(message.into())
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        ProjectError::Unsupported(message.into())
    }

    /// A remote failure with no transport error behind it (e.g. a bad status).
    pub fn remote(message: impl Into<String>) -> Self {
        ProjectError::RemoteFailure {
            message: message.into(),
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ProjectError::InvalidInput(_) => ErrorKind::InvalidInput,
            ProjectError::NotFound(_) => ErrorKind::NotFound,
            ProjectError::Unsupported(_) => ErrorKind::Unsupported,
            ProjectError::RateLimited(_) => ErrorKind::RateLimited,
            ProjectError::RemoteFailure { .. } => ErrorKind::RemoteFailure,
        }
    }
}
