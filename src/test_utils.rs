//! Shared test utilities: a scripted GitHub interpreter and reply builders.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use http::StatusCode;

use crate::effects::{
    ApiReply, CardData, ColumnData, GitHubEffect, GitHubInterpreter, GitHubResponse,
    IssueEventData, ProjectCardRef, ProjectData,
};
use crate::github::GitHubApiError;
use crate::types::{CardId, ColumnId, ProjectId};

/// What the scripted interpreter answers for one effect.
#[derive(Debug, Clone)]
pub enum Scripted {
    Reply(ApiReply),
    RateLimited,
    Failure(String),
}

/// A GitHub interpreter that answers from a script and records every effect.
///
/// Effects without a scripted answer fail the call, so a test notices any
/// request it did not expect.
#[derive(Debug, Default)]
pub struct ScriptedGitHub {
    script: HashMap<GitHubEffect, Scripted>,
    calls: Mutex<Vec<GitHubEffect>>,
}

impl ScriptedGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, effect: GitHubEffect, answer: Scripted) -> Self {
        self.script.insert(effect, answer);
        self
    }

    pub fn reply(self, effect: GitHubEffect, reply: ApiReply) -> Self {
        self.on(effect, Scripted::Reply(reply))
    }

    /// Every effect interpreted so far, in order.
    pub fn calls(&self) -> Vec<GitHubEffect> {
        self.calls.lock().unwrap().clone()
    }

    /// Effects matching a predicate, in order.
    pub fn calls_matching(&self, pred: impl Fn(&GitHubEffect) -> bool) -> Vec<GitHubEffect> {
        self.calls().into_iter().filter(|e| pred(e)).collect()
    }
}

impl GitHubInterpreter for ScriptedGitHub {
    fn interpret(
        &self,
        effect: GitHubEffect,
    ) -> impl Future<Output = Result<ApiReply, GitHubApiError>> + Send {
        self.calls.lock().unwrap().push(effect.clone());
        let answer = self.script.get(&effect).cloned();
        async move {
            match answer {
                Some(Scripted::Reply(reply)) => Ok(reply),
                Some(Scripted::RateLimited) => Err(GitHubApiError::rate_limited(
                    "API rate limit exceeded",
                    Some(403),
                )),
                Some(Scripted::Failure(message)) => Err(GitHubApiError::failure(message)),
                None => Err(GitHubApiError::failure(format!(
                    "unscripted effect: {effect:?}"
                ))),
            }
        }
    }
}

pub fn project(id: u64, name: &str, html_url: &str) -> ProjectData {
    ProjectData {
        id: ProjectId(id),
        name: name.to_string(),
        html_url: html_url.to_string(),
    }
}

pub fn column(id: u64, name: &str) -> ColumnData {
    ColumnData {
        id: ColumnId(id),
        name: name.to_string(),
    }
}

/// An `added_to_project` event carrying a card on the given board.
pub fn card_event(event_id: u64, card: u64, project: u64) -> IssueEventData {
    IssueEventData {
        id: event_id,
        event: "added_to_project".to_string(),
        project_card: Some(ProjectCardRef {
            id: CardId(card),
            project_id: ProjectId(project),
            column_name: Some("To do".to_string()),
        }),
    }
}

/// An issue event unrelated to projects.
pub fn plain_event(event_id: u64, event: &str) -> IssueEventData {
    IssueEventData {
        id: event_id,
        event: event.to_string(),
        project_card: None,
    }
}

pub fn projects_reply(projects: Vec<ProjectData>) -> ApiReply {
    ApiReply::ok(GitHubResponse::Projects(projects))
}

pub fn columns_reply(columns: Vec<ColumnData>) -> ApiReply {
    ApiReply::ok(GitHubResponse::Columns(columns))
}

pub fn events_reply(events: Vec<IssueEventData>) -> ApiReply {
    ApiReply::ok(GitHubResponse::IssueEvents(events))
}

pub fn card_reply(id: u64) -> ApiReply {
    ApiReply::ok(GitHubResponse::Card(CardData { id: CardId(id) }))
}

pub fn card_created_reply(id: u64) -> ApiReply {
    ApiReply::created(GitHubResponse::Card(CardData { id: CardId(id) }))
}

pub fn moved_reply() -> ApiReply {
    ApiReply::created(GitHubResponse::CardMoved)
}

pub fn not_found_reply() -> ApiReply {
    ApiReply::status(StatusCode::NOT_FOUND)
}
