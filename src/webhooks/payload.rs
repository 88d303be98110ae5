//! Loading the event payload file.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::events::{EventName, ParsedEvent};
use super::parser::{ParseError, parse_event};

/// Directory, relative to the working directory, holding local-mode payloads.
pub const LOCAL_PAYLOAD_DIR: &str = "payload";

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Failed to read payload {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Path of the bundled payload for `event`, resolved against `working_dir`.
pub fn local_payload_path(working_dir: &Path, event: EventName) -> PathBuf {
    working_dir.join(LOCAL_PAYLOAD_DIR).join(event.local_fixture())
}

/// Reads and parses the payload at `path`.
pub fn load_event(event: EventName, path: &Path) -> Result<ParsedEvent, PayloadError> {
    let bytes = fs::read(path).map_err(|source| PayloadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_event(event, &bytes)?)
}
