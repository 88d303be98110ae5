//! Finding the project cards an issue already has.
//!
//! GitHub records project changes (`added_to_project`, `moved_columns_in_project`,
//! ...) in the issue's event history, each with a snapshot of the card. That
//! history is the only way to get from an issue to its cards.

use tracing::debug;

use crate::effects::{GitHubEffect, GitHubInterpreter, GitHubResponse, ProjectCardRef};
use crate::error::ProjectError;
use crate::github::{unexpected_response, validate_response};
use crate::types::{IssueSubject, RepoId};

/// Collects every card reference from an issue's event history, in event order.
///
/// Only the first page of events is read. An issue with no project events
/// yields an empty list.
pub async fn find_cards_for_issue<G: GitHubInterpreter>(
    github: &G,
    issue: &IssueSubject,
    repo: &RepoId,
) -> Result<Vec<ProjectCardRef>, ProjectError> {
    let effect = GitHubEffect::ListIssueEvents {
        repo: repo.clone(),
        issue: issue.number,
    };

    let events = match validate_response(github.interpret(effect).await)? {
        GitHubResponse::IssueEvents(events) => events,
        other => return Err(unexpected_response("issue events", &other)),
    };

    let cards: Vec<ProjectCardRef> = events
        .into_iter()
        .filter_map(|event| {
            let card = event.project_card?;
            debug!(
                event = %event.event,
                card = %card.id,
                project_id = %card.project_id,
                column = card.column_name.as_deref().unwrap_or_default(),
                "Card in issue history"
            );
            Some(card)
        })
        .collect();

    debug!(%repo, issue = %issue.number, cards = cards.len(), "Cards found in issue history");
    Ok(cards)
}
