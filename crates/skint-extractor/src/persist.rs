//! JSON persistence of extracted events.
//!
//! The written file is the only thing the display layer reads, so the
//! document is a bare pretty-printed array of [`EventRecord`] objects.

use std::path::Path;

use crate::error::PersistenceError;
use crate::types::EventRecord;

/// Write `events` to `path` as a pretty-printed JSON array, replacing any
/// existing file. Parent directories are not created.
///
/// # Errors
///
/// Returns [`PersistenceError::Write`] if the file cannot be written, or
/// [`PersistenceError::Json`] if serialization fails.
pub fn save_events(events: &[EventRecord], path: &Path) -> Result<(), PersistenceError> {
    let mut json = serde_json::to_string_pretty(events).map_err(|e| PersistenceError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    json.push('\n');

    std::fs::write(path, json).map_err(|e| PersistenceError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), count = events.len(), "wrote events");
    Ok(())
}

/// Read a document written by [`save_events`].
///
/// # Errors
///
/// Returns [`PersistenceError::Read`] if the file cannot be read, or
/// [`PersistenceError::Json`] if it is not an array of event objects.
pub fn load_events(path: &Path) -> Result<Vec<EventRecord>, PersistenceError> {
    let content = std::fs::read_to_string(path).map_err(|e| PersistenceError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| PersistenceError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}
