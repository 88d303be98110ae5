//! Response validation shared by every remote call.

use http::StatusCode;

use crate::effects::{ApiReply, GitHubResponse};
use crate::error::ProjectError;

use super::error::GitHubApiError;

/// Interprets the outcome of a remote call.
///
/// - A rate-limit transport error becomes [`ProjectError::RateLimited`].
/// - Any other transport error becomes [`ProjectError::RemoteFailure`].
/// - A reply whose status is neither `200 OK` nor `201 Created` becomes a
///   [`ProjectError::RemoteFailure`] carrying the status text.
pub fn validate_response(
    result: Result<ApiReply, GitHubApiError>,
) -> Result<GitHubResponse, ProjectError> {
    let reply = match result {
        Ok(reply) => reply,
        Err(err) if err.is_rate_limited() => return Err(ProjectError::RateLimited(err)),
        Err(err) => {
            return Err(ProjectError::RemoteFailure {
                message: "Failed to get results from GitHub".to_string(),
                source: Some(err),
            });
        }
    };

    if reply.status == StatusCode::OK || reply.status == StatusCode::CREATED {
        Ok(reply.data)
    } else {
        Err(ProjectError::remote(format!(
            "Invalid status code: {}. Failed to get results from GitHub",
            reply.status
        )))
    }
}

/// Builds the error for a reply whose shape does not match the effect issued.
pub fn unexpected_response(expected: &str, got: &GitHubResponse) -> ProjectError {
    ProjectError::remote(format!(
        "Unexpected GitHub response: expected {expected}, got {got:?}"
    ))
}
