//! Effects-as-data for the GitHub projects API.
//!
//! The resolution and reconciliation logic issues [`GitHubEffect`] values and
//! inspects the replies. It never performs HTTP itself, which keeps it testable
//! against a scripted interpreter.

pub mod github;
pub mod interpreter;

pub use github::{
    ApiReply, CardData, CardPosition, ColumnData, GitHubEffect, GitHubResponse, IssueEventData,
    ProjectCardRef, ProjectData,
};
pub use interpreter::GitHubInterpreter;
