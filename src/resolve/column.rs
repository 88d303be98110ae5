//! Column ID resolution by exact name.

use tracing::{debug, info};

use crate::effects::{GitHubEffect, GitHubInterpreter, GitHubResponse};
use crate::error::ProjectError;
use crate::github::{unexpected_response, validate_response};
use crate::types::{ColumnId, ProjectId};

/// Resolves the ID of the column named `column_name` on a board.
///
/// Names are compared exactly; the first match in listing order wins.
pub async fn resolve_column_id<G: GitHubInterpreter>(
    github: &G,
    project: ProjectId,
    column_name: &str,
) -> Result<ColumnId, ProjectError> {
    let columns = match validate_response(
        github
            .interpret(GitHubEffect::ListColumns { project })
            .await,
    )? {
        GitHubResponse::Columns(columns) => columns,
        other => return Err(unexpected_response("column list", &other)),
    };

    let found = columns
        .iter()
        .find(|c| c.name == column_name)
        .filter(|c| !c.id.is_unset());

    match found {
        Some(column) => {
            info!(name = %column.name, "Column found");
            debug!(column_id = %column.id, "Column ID");
            Ok(column.id)
        }
        None => Err(ProjectError::not_found(format!(
            "No such a column name: {column_name}"
        ))),
    }
}
