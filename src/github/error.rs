//! GitHub transport error types.
//!
//! The only distinction the rest of the crate cares about is whether GitHub
//! throttled us. That is decided here, at the transport boundary, and carried as
//! a [`GitHubErrorKind`] so callers inspect a tag rather than an error type.

use std::fmt;

use http::{HeaderMap, StatusCode};
use thiserror::Error;

/// The kind of transport error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitHubErrorKind {
    /// Primary or secondary rate limit.
    ///
    /// - HTTP 429
    /// - HTTP 403 with `x-ratelimit-remaining: 0`
    /// - HTTP 403 whose message mentions a rate limit or abuse detection
    RateLimited,

    /// Anything else: connection failures, undecodable bodies, client errors.
    Failure,
}

/// A GitHub API error tagged with its kind.
#[derive(Debug, Error)]
pub struct GitHubApiError {
    pub kind: GitHubErrorKind,

    /// The HTTP status code, if a response was received.
    pub status_code: Option<u16>,

    pub message: String,

    /// The underlying octocrab error, if available.
    #[source]
    pub source: Option<octocrab::Error>,
}

impl fmt::Display for GitHubApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status_code {
            Some(code) => write!(f, "GitHub API error (HTTP {}): {}", code, self.message),
            None => write!(f, "GitHub API error: {}", self.message),
        }
    }
}

impl GitHubApiError {
    pub fn rate_limited(message: impl Into<String>, status_code: Option<u16>) -> Self {
        Self {
            kind: GitHubErrorKind::RateLimited,
            status_code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a failure without an octocrab source.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: GitHubErrorKind::Failure,
            status_code: None,
            message: message.into(),
            source: None,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        self.kind == GitHubErrorKind::RateLimited
    }

    /// Categorizes an octocrab error.
    pub fn from_octocrab(err: octocrab::Error) -> Self {
        let (status_code, message) = match &err {
            octocrab::Error::GitHub { source, .. } => {
                (Some(source.status_code.as_u16()), source.message.clone())
            }
            other => (None, other.to_string()),
        };

        let kind = match status_code {
            Some(429) => GitHubErrorKind::RateLimited,
            Some(403) if is_rate_limit_message(&message) => GitHubErrorKind::RateLimited,
            _ => GitHubErrorKind::Failure,
        };

        Self {
            kind,
            status_code,
            message,
            source: Some(err),
        }
    }

    /// Checks a raw response for throttling, returning the error if throttled.
    pub fn from_throttled_response(
        status: StatusCode,
        headers: &HeaderMap,
        body: &str,
    ) -> Option<Self> {
        if is_rate_limited_response(status, headers, body) {
            let message = if body.is_empty() {
                status.to_string()
            } else {
                body.to_string()
            };
            Some(Self::rate_limited(message, Some(status.as_u16())))
        } else {
            None
        }
    }
}

fn is_rate_limited_response(status: StatusCode, headers: &HeaderMap, body: &str) -> bool {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return true;
    }
    if status != StatusCode::FORBIDDEN {
        return false;
    }

    let exhausted = headers
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim() == "0");

    exhausted || is_rate_limit_message(body)
}

/// Checks if an error message indicates a rate limit.
fn is_rate_limit_message(message: &str) -> bool {
    let message_lower = message.to_lowercase();
    message_lower.contains("rate limit")
        || message_lower.contains("api rate")
        || message_lower.contains("secondary rate")
        || message_lower.contains("abuse detection")
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn rate_limit_detection() {
        assert!(is_rate_limit_message("API rate limit exceeded"));
        assert!(is_rate_limit_message("secondary rate limit"));
        assert!(is_rate_limit_message("abuse detection mechanism"));
        assert!(!is_rate_limit_message("Permission denied"));
    }

    #[test]
    fn too_many_requests_is_throttled() {
        let err = GitHubApiError::from_throttled_response(
            StatusCode::TOO_MANY_REQUESTS,
            &HeaderMap::new(),
            "",
        )
        .expect("throttled");
        assert!(err.is_rate_limited());
        assert_eq!(err.status_code, Some(429));
    }

    #[test]
    fn forbidden_with_exhausted_quota_is_throttled() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static("0"));
        let err = GitHubApiError::from_throttled_response(StatusCode::FORBIDDEN, &headers, "{}");
        assert!(err.is_some_and(|e| e.is_rate_limited()));
    }

    #[test]
    fn forbidden_with_rate_limit_body_is_throttled() {
        let body = r#"{"message":"API rate limit exceeded for 1.2.3.4."}"#;
        let err = GitHubApiError::from_throttled_response(StatusCode::FORBIDDEN, &HeaderMap::new(), body);
        assert!(err.is_some());
    }

    #[test]
    fn plain_forbidden_is_not_throttled() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static("4999"));
        let body = r#"{"message":"Resource not accessible by integration"}"#;
        assert!(GitHubApiError::from_throttled_response(StatusCode::FORBIDDEN, &headers, body).is_none());
        assert!(GitHubApiError::from_throttled_response(StatusCode::NOT_FOUND, &headers, "rate limit").is_none());
    }

    #[test]
    fn display_includes_status() {
        let err = GitHubApiError::rate_limited("slow down", Some(429));
        assert_eq!(err.to_string(), "GitHub API error (HTTP 429): slow down");
        assert_eq!(GitHubApiError::failure("boom").to_string(), "GitHub API error: boom");
    }
}
