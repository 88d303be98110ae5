//! Core domain types for the project card action.

pub mod ids;
pub mod project_url;
pub mod subject;

pub use ids::{CardId, ColumnId, ContentId, IssueNumber, ProjectId, RepoId};
pub use project_url::{OwnerPath, ProjectScope, classify, extract_owner_path};
pub use subject::{ContentType, EventSubject, IssueSubject, PullRequestSubject};
