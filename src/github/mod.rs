//! GitHub API client and effect interpreter.
//!
//! This module provides the implementation for executing project effects via the
//! octocrab library, and the single chokepoint every reply passes through before
//! its payload is inspected.

mod client;
mod error;
mod interpreter;
mod validate;

pub use client::OctocrabClient;
pub use error::{GitHubApiError, GitHubErrorKind};
pub use interpreter::interpret_github_effect;
pub use validate::{unexpected_response, validate_response};
