//! Configuration read from the workflow environment.
//!
//! Values are read once, through a lookup function, into a [`Config`] that is
//! passed down explicitly. Tests supply their own lookup instead of mutating the
//! process environment.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::action::Target;
use crate::logging::LogSettings;
use crate::webhooks::{EventName, UnknownEventName, local_payload_path};

pub const EVENT_NAME_VAR: &str = "GITHUB_EVENT_NAME";
pub const EVENT_PATH_VAR: &str = "GITHUB_EVENT_PATH";
pub const PROJECT_URL_VAR: &str = "GITHUB_PROJECT_URL";
pub const COLUMN_NAME_VAR: &str = "GITHUB_PROJECT_COLUMN_NAME";
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";
pub const LOCAL_VAR: &str = "GITHUB_ACTION_LOCAL";

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The triggering event is not one the action handles. Not a failure.
    #[error(transparent)]
    UnknownEvent(#[from] UnknownEventName),

    #[error("Environment variable {0} is not defined in your workflow file")]
    Missing(&'static str),

    #[error("Failed to resolve working directory: {0}")]
    WorkingDir(#[source] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub event: EventName,
    /// Board URL; checked by [`Config::target`] once the event is actionable.
    pub project_url: Option<String>,
    pub column_name: Option<String>,
    /// API token; `None` runs unauthenticated.
    pub token: Option<String>,
    pub payload_path: PathBuf,
    pub log: LogSettings,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let working_dir = std::env::current_dir().map_err(ConfigError::WorkingDir)?;
        Self::from_lookup(|key| std::env::var(key).ok(), &working_dir)
    }

    /// Builds configuration from a variable lookup.
    ///
    /// `working_dir` anchors the bundled payload path used in local mode. Only
    /// what is needed to read the payload is required here; the board and
    /// column are required by [`Config::target`].
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        working_dir: &Path,
    ) -> Result<Self, ConfigError> {
        let event: EventName = lookup(EVENT_NAME_VAR).unwrap_or_default().parse()?;
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        // Local mode is on when the variable exists at all, even if empty.
        let payload_path = if lookup(LOCAL_VAR).is_some() {
            local_payload_path(working_dir, event)
        } else {
            PathBuf::from(non_empty(EVENT_PATH_VAR).ok_or(ConfigError::Missing(EVENT_PATH_VAR))?)
        };

        Ok(Self {
            event,
            project_url: non_empty(PROJECT_URL_VAR),
            column_name: non_empty(COLUMN_NAME_VAR),
            token: non_empty(TOKEN_VAR),
            payload_path,
            log: LogSettings::from_lookup(&lookup),
        })
    }

    /// The board and column to file the card into.
    pub fn target(&self) -> Result<Target, ConfigError> {
        let project_url = self
            .project_url
            .clone()
            .ok_or(ConfigError::Missing(PROJECT_URL_VAR))?;
        let column_name = self
            .column_name
            .clone()
            .ok_or(ConfigError::Missing(COLUMN_NAME_VAR))?;

        Ok(Target {
            project_url,
            column_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn base() -> Vec<(&'static str, &'static str)> {
        vec![
            (EVENT_NAME_VAR, "issues"),
            (PROJECT_URL_VAR, "https://github.com/octocat/hello/projects/1"),
            (COLUMN_NAME_VAR, "To do"),
            (EVENT_PATH_VAR, "/github/workflow/event.json"),
            (TOKEN_VAR, "ghp_example"),
        ]
    }

    #[test]
    fn reads_complete_configuration() {
        let config = Config::from_lookup(lookup(&base()), Path::new("/work")).unwrap();

        assert_eq!(config.event, EventName::Issues);
        let target = config.target().unwrap();
        assert_eq!(
            target.project_url,
            "https://github.com/octocat/hello/projects/1"
        );
        assert_eq!(target.column_name, "To do");
        assert_eq!(config.token.as_deref(), Some("ghp_example"));
        assert_eq!(config.payload_path, PathBuf::from("/github/workflow/event.json"));
        assert!(!config.log.debug);
    }

    #[test]
    fn unknown_event_name_is_distinguished() {
        let mut vars = base();
        vars[0] = (EVENT_NAME_VAR, "push");
        let err = Config::from_lookup(lookup(&vars), Path::new("/work")).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownEvent(_)));

        let vars: Vec<_> = base().into_iter().skip(1).collect();
        let err = Config::from_lookup(lookup(&vars), Path::new("/work")).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownEvent(_)));
    }

    #[test]
    fn missing_board_is_reported_by_target_not_at_load() {
        let vars: Vec<_> = base()
            .into_iter()
            .filter(|(k, _)| *k != PROJECT_URL_VAR)
            .collect();
        let config = Config::from_lookup(lookup(&vars), Path::new("/work")).unwrap();
        let err = config.target().unwrap_err();
        assert!(matches!(err, ConfigError::Missing(PROJECT_URL_VAR)));

        let mut vars = base();
        vars[2] = (COLUMN_NAME_VAR, "");
        let config = Config::from_lookup(lookup(&vars), Path::new("/work")).unwrap();
        let err = config.target().unwrap_err();
        assert!(matches!(err, ConfigError::Missing(COLUMN_NAME_VAR)));
    }

    #[test]
    fn local_mode_uses_bundled_payload() {
        let mut vars: Vec<_> = base()
            .into_iter()
            .filter(|(k, _)| *k != EVENT_PATH_VAR)
            .collect();
        vars.push((LOCAL_VAR, ""));
        vars[0] = (EVENT_NAME_VAR, "pull_request");

        let config = Config::from_lookup(lookup(&vars), Path::new("/work")).unwrap();
        assert_eq!(
            config.payload_path,
            PathBuf::from("/work/payload/pull_request_event.json")
        );
    }

    #[test]
    fn event_path_required_outside_local_mode() {
        let vars: Vec<_> = base()
            .into_iter()
            .filter(|(k, _)| *k != EVENT_PATH_VAR)
            .collect();
        let err = Config::from_lookup(lookup(&vars), Path::new("/work")).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(EVENT_PATH_VAR)));
    }

    #[test]
    fn empty_token_runs_unauthenticated() {
        let mut vars = base();
        vars[4] = (TOKEN_VAR, "");
        let config = Config::from_lookup(lookup(&vars), Path::new("/work")).unwrap();
        assert!(config.token.is_none());
    }

    #[test]
    fn from_env_reads_process_environment() {
        temp_env::with_vars(
            [
                (EVENT_NAME_VAR, Some("pull_request")),
                (PROJECT_URL_VAR, Some("https://github.com/orgs/acme/projects/2")),
                (COLUMN_NAME_VAR, Some("Review")),
                (EVENT_PATH_VAR, Some("/tmp/event.json")),
                (LOCAL_VAR, None),
                (TOKEN_VAR, None),
                ("DEBUG", Some("true")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.event, EventName::PullRequest);
                assert_eq!(config.target().unwrap().column_name, "Review");
                assert!(config.token.is_none());
                assert!(config.log.debug);
            },
        );
    }
}
