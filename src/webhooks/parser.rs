//! Event payload parser.
//!
//! Parses the JSON file GitHub Actions writes for the triggering event into an
//! [`EventSubject`].
//!
//! # Parsing Strategy
//!
//! 1. The event name decides which payload shape to expect
//! 2. Issue payloads whose action is not `opened` are ignored, not errors
//! 3. Pull request payloads are accepted for any action
//! 4. A zero content ID is rejected: the card endpoint would refuse it anyway

use serde::Deserialize;
use thiserror::Error;

use crate::types::{ContentId, EventSubject, IssueNumber, IssueSubject, PullRequestSubject};

use super::events::{EventName, ParsedEvent};

/// Error type for payload parsing failures.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON deserialization failed (includes missing required fields).
    #[error("Failed to unmarshal JSON payload: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Field has invalid value (e.g., a zero ID).
    #[error("invalid field value for {field}: {value}")]
    InvalidField { field: &'static str, value: String },
}

/// Parses an event payload.
pub fn parse_event(event: EventName, payload: &[u8]) -> Result<ParsedEvent, ParseError> {
    match event {
        EventName::Issues => parse_issues(payload),
        EventName::PullRequest => parse_pull_request(payload),
    }
}

// ============================================================================
// Raw payload structures for deserialization
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawIssuesPayload {
    action: String,
    issue: RawIssue,
}

#[derive(Debug, Deserialize)]
struct RawIssue {
    id: u64,
    number: u64,
    url: String,
}

#[derive(Debug, Deserialize)]
struct RawPullRequestPayload {
    action: String,
    pull_request: RawPullRequest,
}

#[derive(Debug, Deserialize)]
struct RawPullRequest {
    id: u64,
    number: u64,
}

// ============================================================================
// issues event
// ============================================================================

fn parse_issues(payload: &[u8]) -> Result<ParsedEvent, ParseError> {
    let raw: RawIssuesPayload = serde_json::from_slice(payload)?;

    if raw.action != "opened" {
        return Ok(ParsedEvent::Ignored { action: raw.action });
    }

    if raw.issue.id == 0 {
        return Err(ParseError::InvalidField {
            field: "issue.id",
            value: "0".to_string(),
        });
    }

    Ok(ParsedEvent::Actionable(EventSubject::Issue(IssueSubject {
        id: ContentId(raw.issue.id),
        number: IssueNumber(raw.issue.number),
        api_url: raw.issue.url,
    })))
}

// ============================================================================
// pull_request event
// ============================================================================

fn parse_pull_request(payload: &[u8]) -> Result<ParsedEvent, ParseError> {
    let raw: RawPullRequestPayload = serde_json::from_slice(payload)?;

    if raw.pull_request.id == 0 {
        return Err(ParseError::InvalidField {
            field: "pull_request.id",
            value: "0".to_string(),
        });
    }

    tracing::debug!(action = %raw.action, "Pull request event");

    Ok(ParsedEvent::Actionable(EventSubject::PullRequest(
        PullRequestSubject {
            id: ContentId(raw.pull_request.id),
            number: IssueNumber(raw.pull_request.number),
        },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISSUE_FIXTURE: &[u8] = include_bytes!("../../payload/issue_event.json");
    const PR_FIXTURE: &[u8] = include_bytes!("../../payload/pull_request_event.json");

    #[test]
    fn bundled_issue_fixture_is_actionable() {
        let parsed = parse_event(EventName::Issues, ISSUE_FIXTURE).unwrap();
        let ParsedEvent::Actionable(EventSubject::Issue(issue)) = parsed else {
            panic!("expected an actionable issue, got {parsed:?}");
        };
        assert_eq!(issue.id, ContentId(444500041));
        assert_eq!(issue.number, IssueNumber(1));
        assert_eq!(
            issue.api_url,
            "https://api.github.com/repos/Codertocat/Hello-World/issues/1"
        );
    }

    #[test]
    fn bundled_pull_request_fixture_is_actionable() {
        let parsed = parse_event(EventName::PullRequest, PR_FIXTURE).unwrap();
        assert_eq!(
            parsed,
            ParsedEvent::Actionable(EventSubject::PullRequest(PullRequestSubject {
                id: ContentId(279147437),
                number: IssueNumber(2),
            }))
        );
    }

    #[test]
    fn issue_actions_other_than_opened_are_ignored() {
        let payload = br#"{
            "action": "edited",
            "issue": { "id": 1, "number": 1, "url": "https://api.github.com/repos/o/r/issues/1" }
        }"#;
        let parsed = parse_event(EventName::Issues, payload).unwrap();
        assert_eq!(
            parsed,
            ParsedEvent::Ignored {
                action: "edited".to_string()
            }
        );
    }

    #[test]
    fn pull_requests_are_accepted_for_any_action() {
        let payload = br#"{ "action": "synchronize", "pull_request": { "id": 5, "number": 3 } }"#;
        let parsed = parse_event(EventName::PullRequest, payload).unwrap();
        assert!(matches!(parsed, ParsedEvent::Actionable(EventSubject::PullRequest(_))));
    }

    #[test]
    fn zero_ids_are_rejected() {
        let payload = br#"{
            "action": "opened",
            "issue": { "id": 0, "number": 1, "url": "https://api.github.com/repos/o/r/issues/1" }
        }"#;
        let err = parse_event(EventName::Issues, payload).unwrap_err();
        assert!(matches!(err, ParseError::InvalidField { field: "issue.id", .. }));

        let payload = br#"{ "action": "opened", "pull_request": { "id": 0, "number": 3 } }"#;
        let err = parse_event(EventName::PullRequest, payload).unwrap_err();
        assert!(matches!(err, ParseError::InvalidField { field: "pull_request.id", .. }));
    }

    #[test]
    fn malformed_payload_is_json_error() {
        let err = parse_event(EventName::Issues, b"{ not json").unwrap_err();
        assert!(matches!(err, ParseError::JsonError(_)));

        let err = parse_event(EventName::PullRequest, br#"{ "action": "opened" }"#).unwrap_err();
        assert!(matches!(err, ParseError::JsonError(_)));
    }
}
