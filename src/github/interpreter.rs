//! GitHub effect interpreter using octocrab.
//!
//! Requests go through octocrab's raw `_get`/`_post` so the status code reaches
//! the caller untouched; octocrab's typed helpers turn every non-2xx status into
//! an error and would hide a 404 on a deleted card.
//!
//! Key implementation details:
//! - Throttling (429, or 403 with an exhausted quota) becomes a
//!   `RateLimited` transport error here, at the boundary
//! - Bodies are decoded only for 200 and 201
//! - No retries: a run either succeeds or exits non-zero

use http::{HeaderMap, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::effects::{
    ApiReply, CardData, CardPosition, ColumnData, GitHubEffect, GitHubInterpreter, GitHubResponse,
    IssueEventData, ProjectData,
};
use crate::types::{CardId, ColumnId, ContentId, ContentType, IssueNumber, ProjectId, RepoId};

use super::client::OctocrabClient;
use super::error::GitHubApiError;

impl GitHubInterpreter for OctocrabClient {
    async fn interpret(&self, effect: GitHubEffect) -> Result<ApiReply, GitHubApiError> {
        interpret_github_effect(self, effect).await
    }
}

/// Interprets a GitHub effect, executing it against the GitHub API.
pub async fn interpret_github_effect(
    client: &OctocrabClient,
    effect: GitHubEffect,
) -> Result<ApiReply, GitHubApiError> {
    tracing::debug!(?effect, "Executing GitHub effect");

    match effect {
        GitHubEffect::ListRepoProjects { repo } => list_repo_projects(client, &repo).await,
        GitHubEffect::ListOrgProjects { org, per_page } => {
            list_org_projects(client, &org, per_page).await
        }
        GitHubEffect::ListColumns { project } => list_columns(client, project).await,
        GitHubEffect::ListIssueEvents { repo, issue } => {
            list_issue_events(client, &repo, issue).await
        }
        GitHubEffect::CreateCard {
            column,
            content_id,
            content_type,
        } => create_card(client, column, content_id, content_type).await,
        GitHubEffect::GetCard { card } => get_card(client, card).await,
        GitHubEffect::MoveCard {
            card,
            column,
            position,
        } => move_card(client, card, column, position).await,
    }
}

// ─── Transport ────────────────────────────────────────────────────────────────

/// A raw response: status plus body text.
struct RawReply {
    status: StatusCode,
    body: String,
}

impl RawReply {
    fn is_decodable(&self) -> bool {
        self.status == StatusCode::OK || self.status == StatusCode::CREATED
    }

    /// Decodes the body when the status allows it, wrapping the result.
    fn decode<T, F>(self, route: &str, wrap: F) -> Result<ApiReply, GitHubApiError>
    where
        T: DeserializeOwned,
        F: FnOnce(T) -> GitHubResponse,
    {
        if !self.is_decodable() {
            return Ok(ApiReply::status(self.status));
        }

        let value: T = serde_json::from_str(&self.body).map_err(|e| {
            GitHubApiError::failure(format!("Failed to decode response from {route}: {e}"))
        })?;

        Ok(ApiReply {
            status: self.status,
            data: wrap(value),
        })
    }
}

async fn get(client: &OctocrabClient, route: &str) -> Result<RawReply, GitHubApiError> {
    let response = client
        .inner()
        ._get(route)
        .await
        .map_err(GitHubApiError::from_octocrab)?;

    let status = response.status();
    let headers = response.headers().clone();
    let body = client
        .inner()
        .body_to_string(response)
        .await
        .map_err(GitHubApiError::from_octocrab)?;

    raw_reply(status, &headers, body)
}

async fn post<B: Serialize + ?Sized>(
    client: &OctocrabClient,
    route: &str,
    body: &B,
) -> Result<RawReply, GitHubApiError> {
    let response = client
        .inner()
        ._post(route, Some(body))
        .await
        .map_err(GitHubApiError::from_octocrab)?;

    let status = response.status();
    let headers = response.headers().clone();
    let body = client
        .inner()
        .body_to_string(response)
        .await
        .map_err(GitHubApiError::from_octocrab)?;

    raw_reply(status, &headers, body)
}

fn raw_reply(
    status: StatusCode,
    headers: &HeaderMap,
    body: String,
) -> Result<RawReply, GitHubApiError> {
    if let Some(err) = GitHubApiError::from_throttled_response(status, headers, &body) {
        return Err(err);
    }
    Ok(RawReply { status, body })
}

// ─── Board Lookup ─────────────────────────────────────────────────────────────

async fn list_repo_projects(
    client: &OctocrabClient,
    repo: &RepoId,
) -> Result<ApiReply, GitHubApiError> {
    let route = format!("/repos/{}/{}/projects", repo.owner, repo.repo);
    get(client, &route)
        .await?
        .decode(&route, |projects: Vec<ProjectData>| {
            GitHubResponse::Projects(projects)
        })
}

async fn list_org_projects(
    client: &OctocrabClient,
    org: &str,
    per_page: u32,
) -> Result<ApiReply, GitHubApiError> {
    let route = format!("/orgs/{org}/projects?per_page={per_page}");
    get(client, &route)
        .await?
        .decode(&route, |projects: Vec<ProjectData>| {
            GitHubResponse::Projects(projects)
        })
}

async fn list_columns(
    client: &OctocrabClient,
    project: ProjectId,
) -> Result<ApiReply, GitHubApiError> {
    let route = format!("/projects/{project}/columns");
    get(client, &route)
        .await?
        .decode(&route, |columns: Vec<ColumnData>| GitHubResponse::Columns(columns))
}

// ─── Card History ─────────────────────────────────────────────────────────────

async fn list_issue_events(
    client: &OctocrabClient,
    repo: &RepoId,
    issue: IssueNumber,
) -> Result<ApiReply, GitHubApiError> {
    let route = format!("/repos/{}/{}/issues/{}/events", repo.owner, repo.repo, issue.0);
    get(client, &route)
        .await?
        .decode(&route, |events: Vec<IssueEventData>| {
            GitHubResponse::IssueEvents(events)
        })
}

// ─── Cards ────────────────────────────────────────────────────────────────────

async fn create_card(
    client: &OctocrabClient,
    column: ColumnId,
    content_id: ContentId,
    content_type: ContentType,
) -> Result<ApiReply, GitHubApiError> {
    let route = format!("/projects/columns/{column}/cards");

    #[derive(Serialize)]
    struct CreateCardRequest {
        content_id: u64,
        content_type: &'static str,
    }

    let request = CreateCardRequest {
        content_id: content_id.0,
        content_type: content_type.as_api_str(),
    };

    post(client, &route, &request)
        .await?
        .decode(&route, |card: CardData| GitHubResponse::Card(card))
}

async fn get_card(client: &OctocrabClient, card: CardId) -> Result<ApiReply, GitHubApiError> {
    let route = format!("/projects/columns/cards/{card}");
    get(client, &route)
        .await?
        .decode(&route, |card: CardData| GitHubResponse::Card(card))
}

async fn move_card(
    client: &OctocrabClient,
    card: CardId,
    column: ColumnId,
    position: CardPosition,
) -> Result<ApiReply, GitHubApiError> {
    let route = format!("/projects/columns/cards/{card}/moves");

    #[derive(Serialize)]
    struct MoveCardRequest {
        position: &'static str,
        column_id: u64,
    }

    let request = MoveCardRequest {
        position: position.as_api_str(),
        column_id: column.0,
    };

    // The move endpoint answers 201 with an empty object.
    post(client, &route, &request)
        .await?
        .decode(&route, |_: serde_json::Value| GitHubResponse::CardMoved)
}
