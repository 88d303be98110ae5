//! GitHub projects API effect types.
//!
//! These types describe the project board operations as data, without executing
//! them. The octocrab interpreter in [`crate::github`] executes them against the
//! REST API; tests execute them against a scripted interpreter.

use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::types::{CardId, ColumnId, ContentId, ContentType, IssueNumber, ProjectId, RepoId};

/// Where a moved card lands within its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardPosition {
    Top,
}

impl CardPosition {
    /// Returns the `position` string the card move endpoint expects.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            CardPosition::Top => "top",
        }
    }
}

/// A GitHub projects API effect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GitHubEffect {
    // ─── Board Lookup ─────────────────────────────────────────────────────────
    /// List the project boards of a repository (first page only).
    ListRepoProjects { repo: RepoId },

    /// List the project boards of an organization (one page of `per_page`).
    ListOrgProjects { org: String, per_page: u32 },

    /// List the columns of a board (first page only).
    ListColumns { project: ProjectId },

    // ─── Card History ─────────────────────────────────────────────────────────
    /// List the event history of an issue (first page only).
    ListIssueEvents { repo: RepoId, issue: IssueNumber },

    // ─── Cards ────────────────────────────────────────────────────────────────
    /// Create a card in a column linking to an issue or pull request.
    CreateCard {
        column: ColumnId,
        content_id: ContentId,
        content_type: ContentType,
    },

    /// Fetch a single card.
    GetCard { card: CardId },

    /// Move a card to a column.
    MoveCard {
        card: CardId,
        column: ColumnId,
        position: CardPosition,
    },
}

// ─── Response Types ───────────────────────────────────────────────────────────

/// A project board as listed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectData {
    pub id: ProjectId,
    #[serde(default)]
    pub name: String,
    /// The board's web URL; this is what a configured project URL is compared to.
    #[serde(default)]
    pub html_url: String,
}

/// A column within a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnData {
    pub id: ColumnId,
    #[serde(default)]
    pub name: String,
}

/// The card reference attached to a project-related issue event.
///
/// This is a snapshot taken when the event happened; the card may since have
/// been deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCardRef {
    pub id: CardId,
    pub project_id: ProjectId,
    #[serde(default)]
    pub column_name: Option<String>,
}

/// One entry of an issue's event history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueEventData {
    pub id: u64,
    /// Event name, e.g. `added_to_project` or `labeled`.
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub project_card: Option<ProjectCardRef>,
}

/// A card as returned by the card endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardData {
    pub id: CardId,
}

/// Decoded payload of a GitHub effect.
///
/// Each variant corresponds to the response from a particular effect type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitHubResponse {
    /// Response to `ListRepoProjects` and `ListOrgProjects`.
    Projects(Vec<ProjectData>),

    /// Response to `ListColumns`.
    Columns(Vec<ColumnData>),

    /// Response to `ListIssueEvents`.
    IssueEvents(Vec<IssueEventData>),

    /// Response to `CreateCard` and `GetCard`.
    Card(CardData),

    /// Response to `MoveCard`.
    CardMoved,

    /// The status was not 200/201, so the body was not decoded.
    Undecoded,
}

/// A response as seen at the transport boundary: status plus decoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    pub status: StatusCode,
    pub data: GitHubResponse,
}

impl ApiReply {
    pub fn ok(data: GitHubResponse) -> Self {
        Self {
            status: StatusCode::OK,
            data,
        }
    }

    pub fn created(data: GitHubResponse) -> Self {
        Self {
            status: StatusCode::CREATED,
            data,
        }
    }

    pub fn status(status: StatusCode) -> Self {
        Self {
            status,
            data: GitHubResponse::Undecoded,
        }
    }
}
