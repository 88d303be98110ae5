//! Create-or-move decision for the event subject's card.
//!
//! A run performs exactly one card mutation:
//!
//! 1. For issues, each historical card on the target board is re-fetched. The
//!    first one that still exists is moved to the target column (top position).
//! 2. Otherwise, including for every pull request, a new card is created in the
//!    target column.
//!
//! A card that 404s on re-fetch was deleted after the history entry was
//! written; it is skipped so a dangling reference never blocks creation.

use http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::effects::{
    CardPosition, GitHubEffect, GitHubInterpreter, GitHubResponse, ProjectCardRef,
};
use crate::error::ProjectError;
use crate::github::{unexpected_response, validate_response};
use crate::types::{CardId, ColumnId, EventSubject, ProjectId};

use super::locate::find_cards_for_issue;

/// The mutation a run performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CardOutcome {
    Created { card: CardId },
    Moved { card: CardId },
}

/// Places the subject's card in `column` of `project`, moving an existing card
/// when the issue already has a live one on that board.
pub async fn reconcile_card<G: GitHubInterpreter>(
    github: &G,
    subject: &EventSubject,
    project: ProjectId,
    column: ColumnId,
) -> Result<CardOutcome, ProjectError> {
    if let EventSubject::Issue(issue) = subject {
        let repo = issue.repo()?;
        let candidates = find_cards_for_issue(github, issue, &repo).await?;

        if let Some(card) = find_live_card(github, &candidates, project).await? {
            move_card(github, card, column).await?;
            info!(%card, %column, "Moved existing card");
            return Ok(CardOutcome::Moved { card });
        }
    }

    let card = create_card(github, subject, column).await?;
    info!(
        %card,
        content_id = %subject.content_id(),
        %column,
        "Created card"
    );
    Ok(CardOutcome::Created { card })
}

/// Returns the first candidate on `project` that still exists.
async fn find_live_card<G: GitHubInterpreter>(
    github: &G,
    candidates: &[ProjectCardRef],
    project: ProjectId,
) -> Result<Option<CardId>, ProjectError> {
    for candidate in candidates.iter().filter(|c| c.project_id == project) {
        let result = github
            .interpret(GitHubEffect::GetCard { card: candidate.id })
            .await;

        if matches!(&result, Ok(reply) if reply.status == StatusCode::NOT_FOUND) {
            debug!(
                card = %candidate.id,
                column = candidate.column_name.as_deref().unwrap_or_default(),
                "Card from issue history no longer exists, skipping"
            );
            continue;
        }

        match validate_response(result)? {
            GitHubResponse::Card(card) => return Ok(Some(card.id)),
            other => return Err(unexpected_response("card", &other)),
        }
    }

    Ok(None)
}

async fn move_card<G: GitHubInterpreter>(
    github: &G,
    card: CardId,
    column: ColumnId,
) -> Result<(), ProjectError> {
    let effect = GitHubEffect::MoveCard {
        card,
        column,
        position: CardPosition::Top,
    };

    match validate_response(github.interpret(effect).await)? {
        GitHubResponse::CardMoved => Ok(()),
        other => Err(unexpected_response("card move", &other)),
    }
}

async fn create_card<G: GitHubInterpreter>(
    github: &G,
    subject: &EventSubject,
    column: ColumnId,
) -> Result<CardId, ProjectError> {
    let effect = GitHubEffect::CreateCard {
        column,
        content_id: subject.content_id(),
        content_type: subject.content_type(),
    };

    match validate_response(github.interpret(effect).await)? {
        GitHubResponse::Card(card) if !card.id.is_unset() => Ok(card.id),
        GitHubResponse::Card(_) => Err(ProjectError::remote("Failed to create a card")),
        other => Err(unexpected_response("created card", &other)),
    }
}
