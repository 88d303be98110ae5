//! Event payload handling.
//!
//! This module provides:
//! - The event names the action responds to
//! - Parsing of `issues` and `pull_request` payloads into an event subject
//! - Loading the payload from `GITHUB_EVENT_PATH` or a bundled local fixture

pub mod events;
pub mod parser;
pub mod payload;

pub use events::{EventName, ParsedEvent, UnknownEventName};
pub use parser::{ParseError, parse_event};
pub use payload::{PayloadError, load_event, local_payload_path};
