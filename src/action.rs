//! The per-run pipeline.
//!
//! classify → owner path → board ID → column ID → create-or-move. Each step
//! awaits the previous one; the first error ends the run with no card mutation.

use tracing::info;

use crate::cards::{CardOutcome, reconcile_card};
use crate::effects::GitHubInterpreter;
use crate::error::ProjectError;
use crate::resolve::{resolve_column_id, resolve_project_id};
use crate::types::{EventSubject, classify, extract_owner_path};

/// The board and column a card should end up in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Web URL of the board, e.g. `https://github.com/orgs/acme/projects/2`.
    pub project_url: String,
    pub column_name: String,
}

/// Files `subject` into the target column.
pub async fn run<G: GitHubInterpreter>(
    github: &G,
    target: &Target,
    subject: &EventSubject,
) -> Result<CardOutcome, ProjectError> {
    let scope = classify(&target.project_url)?;
    let owner = extract_owner_path(&target.project_url)?;
    info!(%scope, "Project type");

    let project = resolve_project_id(github, scope, &owner, &target.project_url).await?;
    let column = resolve_column_id(github, project, &target.column_name).await?;

    info!(column = %target.column_name, "Project card is being added to column");
    reconcile_card(github, subject, project, column).await
}
