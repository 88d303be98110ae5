//! One invocation of the action, from configuration to exit status.
//!
//! | Situation                                   | Status    | Exit |
//! |---------------------------------------------|-----------|------|
//! | Event name other than issues / pull_request | `Skipped` | 0    |
//! | Issue action other than `opened`            | `Skipped` | 0    |
//! | Issue payload unreadable or malformed       | `Skipped` | 0    |
//! | Pull request payload unreadable or malformed| `Failed`  | 1    |
//! | Zero issue or pull request ID               | `Failed`  | 1    |
//! | Missing board URL, column or event path     | `Failed`  | 1    |
//! | Any resolution or card mutation failure     | `Failed`  | 1    |
//! | Card created or moved                       | `Filed`   | 0    |

use std::fmt;
use std::process::ExitCode;

use tracing::{debug, error, info};

use crate::action;
use crate::cards::CardOutcome;
use crate::config::{Config, ConfigError};
use crate::effects::GitHubInterpreter;
use crate::webhooks::{EventName, ParseError, ParsedEvent, PayloadError, load_event};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// A card was created or moved.
    Filed(CardOutcome),
    /// Nothing to do for this event.
    Skipped,
    Failed,
}

impl RunStatus {
    pub fn is_success(&self) -> bool {
        !matches!(self, RunStatus::Failed)
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Status for a configuration that could not be read.
pub fn config_failed(err: &ConfigError) -> RunStatus {
    match err {
        ConfigError::UnknownEvent(e) => {
            info!(error = %e, "Nothing to do for this event");
            RunStatus::Skipped
        }
        e => {
            error!(error = %e, "Invalid configuration");
            RunStatus::Failed
        }
    }
}

/// Reads the event payload and files its subject onto the configured board.
///
/// `connect` builds the GitHub client from the configured token. It is only
/// called once the payload is known to be actionable.
pub async fn execute<G, E, F>(config: &Config, connect: F) -> RunStatus
where
    G: GitHubInterpreter,
    E: fmt::Display,
    F: FnOnce(Option<String>) -> Result<G, E>,
{
    let subject = match load_event(config.event, &config.payload_path) {
        Ok(ParsedEvent::Actionable(subject)) => subject,
        Ok(ParsedEvent::Ignored { action }) => {
            info!(%action, "GitHub action interrupts: this issue is not new one");
            return RunStatus::Skipped;
        }
        Err(e) => return payload_failed(config, &e),
    };
    info!(event = %config.event, "New event is found");
    debug!(content_id = %subject.content_id(), "Content ID");

    let target = match config.target() {
        Ok(target) => target,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return RunStatus::Failed;
        }
    };

    let github = match connect(config.token.clone()) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Failed to build GitHub client");
            return RunStatus::Failed;
        }
    };

    match action::run(&github, &target, &subject).await {
        Ok(outcome) => {
            info!(?outcome, "Done");
            RunStatus::Filed(outcome)
        }
        Err(e) => {
            error!(error = ?e, "{e}");
            RunStatus::Failed
        }
    }
}

fn payload_failed(config: &Config, err: &PayloadError) -> RunStatus {
    let path = config.payload_path.display();
    match err {
        PayloadError::Parse(ParseError::InvalidField { .. }) => {
            error!(error = %err, %path, "Invalid event payload");
            RunStatus::Failed
        }
        // An unreadable issue payload is treated as "not an opened issue".
        _ if config.event == EventName::Issues => {
            error!(error = %err, %path, "Failed to load issue payload");
            RunStatus::Skipped
        }
        _ => {
            error!(error = %err, %path, "Failed to load payload");
            RunStatus::Failed
        }
    }
}
