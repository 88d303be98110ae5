//! GitHub event types the action handles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::EventSubject;

/// The workflow event that triggered the run (`GITHUB_EVENT_NAME`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventName {
    Issues,
    PullRequest,
}

impl EventName {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventName::Issues => "issues",
            EventName::PullRequest => "pull_request",
        }
    }

    /// File name of the bundled payload used in local mode.
    pub fn local_fixture(&self) -> &'static str {
        match self {
            EventName::Issues => "issue_event.json",
            EventName::PullRequest => "pull_request_event.json",
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an event name the action does not handle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported event name: {0:?}")]
pub struct UnknownEventName(pub String);

impl FromStr for EventName {
    type Err = UnknownEventName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "issues" => Ok(EventName::Issues),
            "pull_request" => Ok(EventName::PullRequest),
            other => Err(UnknownEventName(other.to_string())),
        }
    }
}

/// Result of reading an event payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedEvent {
    /// The payload names something to file on the board.
    Actionable(EventSubject),

    /// The payload is valid but needs no card (e.g. an issue that was edited).
    Ignored { action: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_event_names() {
        assert_eq!("issues".parse::<EventName>().unwrap(), EventName::Issues);
        assert_eq!(
            "pull_request".parse::<EventName>().unwrap(),
            EventName::PullRequest
        );
    }

    #[test]
    fn rejects_other_event_names() {
        let err = "push".parse::<EventName>().unwrap_err();
        assert_eq!(err, UnknownEventName("push".to_string()));
        assert!("Issues".parse::<EventName>().is_err());
    }

    #[test]
    fn local_fixture_names() {
        assert_eq!(EventName::Issues.local_fixture(), "issue_event.json");
        assert_eq!(
            EventName::PullRequest.local_fixture(),
            "pull_request_event.json"
        );
    }
}
