//! Effect interpreter trait.
//!
//! The trait-based design enables:
//! - The octocrab interpreter for real runs
//! - Scripted interpreters for testing

use std::future::Future;

use crate::github::GitHubApiError;

use super::github::{ApiReply, GitHubEffect};

/// Interprets GitHub effects against the GitHub API.
///
/// A transport-level failure is an `Err`. A response with any status is an
/// `Ok(ApiReply)`; deciding whether that status is acceptable is left to the
/// caller (see [`crate::github::validate_response`]).
///
/// # Example (mock for testing)
///
/// ```ignore
/// struct FixedInterpreter {
///     reply: ApiReply,
/// }
///
/// impl GitHubInterpreter for FixedInterpreter {
///     fn interpret(
///         &self,
///         _effect: GitHubEffect,
///     ) -> impl Future<Output = Result<ApiReply, GitHubApiError>> + Send {
///         let reply = self.reply.clone();
///         async move { Ok(reply) }
///     }
/// }
/// ```
pub trait GitHubInterpreter {
    /// Execute a GitHub effect and return its response.
    fn interpret(
        &self,
        effect: GitHubEffect,
    ) -> impl Future<Output = Result<ApiReply, GitHubApiError>> + Send;
}

impl<T: GitHubInterpreter + ?Sized> GitHubInterpreter for &T {
    fn interpret(
        &self,
        effect: GitHubEffect,
    ) -> impl Future<Output = Result<ApiReply, GitHubApiError>> + Send {
        (**self).interpret(effect)
    }
}
