//! Event extraction pipeline for The Skint.
//!
//! Fetches the blog's RSS feed, turns each post into prompt text, asks a
//! structured-output model for the events it describes, validates what comes
//! back, and writes the surviving events to a JSON file for the site to
//! render. A post that fails extraction is skipped and reported; it never
//! stops the run.

pub mod aggregate;
pub mod chunker;
pub mod error;
pub mod extraction;
pub mod feed;
pub mod persist;
pub mod pipeline;
pub mod types;

pub use aggregate::{extract_items, AggregateReport, ItemOutcome, SkippedItem};
pub use chunker::build_prompt;
pub use error::{
    ExtractionError, FeedFormatError, NetworkError, PersistenceError, PipelineError,
    SchemaViolation,
};
pub use extraction::{EventExtractor, ExtractionRequest, OpenAiExtractor, StructuredExtractor};
pub use feed::{parse_feed, parse_items, FeedFetcher};
pub use persist::{load_events, save_events};
pub use pipeline::{load_feed, run_pipeline, PipelineOptions, PipelineReport};
pub use types::{EventRecord, Feed, FeedItem};
