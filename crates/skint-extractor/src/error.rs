use std::path::PathBuf;

use thiserror::Error;

use crate::aggregate::SkippedItem;
use crate::types::EventRecord;

/// Feed retrieval failed: transport error or a non-2xx response.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
}

/// The feed markup is not a well-formed RSS document with a channel.
#[derive(Debug, Error)]
pub enum FeedFormatError {
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("invalid RSS feed format: missing <{0}> element")]
    MissingElement(&'static str),

    #[error("feed ended before <{0}> was closed")]
    UnclosedElement(String),
}

/// One candidate object failed validation against the event schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    #[error("expected a JSON object with an `events` array")]
    MissingEvents,

    #[error("events[{index}] is not a JSON object")]
    NotAnObject { index: usize },

    #[error("events[{index}] is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("events[{index}].{field} must be a string")]
    WrongType { index: usize, field: &'static str },

    #[error("events[{index}].link is not a valid URL: {value}")]
    InvalidUrl { index: usize, value: String },
}

/// The extraction call failed or produced output that does not fit the schema.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("extraction provider rejected the API key (HTTP {status})")]
    Unauthorized { status: u16 },

    #[error("extraction provider rate limited the request")]
    RateLimited,

    #[error("extraction provider returned HTTP {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("extraction provider refused the request: {0}")]
    Refused(String),

    #[error("malformed extraction response: {0}")]
    MalformedResponse(String),

    #[error("extraction output failed schema validation: {0}")]
    Schema(#[from] SchemaViolation),
}

/// Writing or reading the persisted event document failed.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error for {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Fatal errors that end a pipeline run.
///
/// Per-item extraction failures never appear here; they are reported as
/// skipped items on the run report instead.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("feed fetch failed: {0}")]
    Network(#[from] NetworkError),

    #[error("feed parse failed: {0}")]
    FeedFormat(#[from] FeedFormatError),

    /// Carries everything the run produced so the caller can still surface it.
    #[error("persisting {} events failed: {source}", .events.len())]
    Persistence {
        #[source]
        source: PersistenceError,
        events: Vec<EventRecord>,
        skipped: Vec<SkippedItem>,
    },
}
