//! Tracing subscriber setup.
//!
//! DEBUG-level output is controlled by an explicit [`LogSettings`] value built
//! once at startup, not by process-wide state.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable that enables DEBUG logs when non-empty.
pub const DEBUG_VAR: &str = "DEBUG";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogSettings {
    pub debug: bool,
}

impl LogSettings {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            debug: lookup(DEBUG_VAR).is_some_and(|v| !v.is_empty()),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Default filter directive when `RUST_LOG` is not set.
    pub fn default_directive(&self) -> &'static str {
        if self.debug {
            "info,project_card_action=debug"
        } else {
            "info"
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the settings when set.
pub fn init(settings: LogSettings) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.default_directive().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_requires_non_empty_value() {
        assert!(LogSettings::from_lookup(|_| Some("1".to_string())).debug);
        assert!(!LogSettings::from_lookup(|_| Some(String::new())).debug);
        assert!(!LogSettings::from_lookup(|_| None).debug);
    }

    #[test]
    fn directive_follows_debug_flag() {
        assert_eq!(
            LogSettings { debug: true }.default_directive(),
            "info,project_card_action=debug"
        );
        assert_eq!(LogSettings::default().default_directive(), "info");
    }
}
