//! Pipeline orchestration: fetch, parse, extract per item, persist.

use std::path::{Path, PathBuf};

use crate::aggregate::{extract_items, SkippedItem};
use crate::error::PipelineError;
use crate::extraction::{EventExtractor, StructuredExtractor};
use crate::feed::{parse_feed, FeedFetcher};
use crate::persist::save_events;
use crate::types::{EventRecord, Feed};

/// Inputs for one run.
#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions<'a> {
    pub feed_url: &'a str,
    /// Maximum number of feed items sent for extraction.
    pub item_limit: usize,
    pub output_path: &'a Path,
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub feed_title: Option<String>,
    /// Items present in the feed, before the limit is applied.
    pub items_in_feed: usize,
    /// Items sent for extraction.
    pub items_processed: usize,
    pub events: Vec<EventRecord>,
    pub skipped: Vec<SkippedItem>,
    pub output_path: PathBuf,
}

/// Fetch and parse the feed at `feed_url`.
///
/// # Errors
///
/// Returns [`PipelineError::Network`] or [`PipelineError::FeedFormat`].
pub async fn load_feed(fetcher: &FeedFetcher, feed_url: &str) -> Result<Feed, PipelineError> {
    let raw = fetcher.fetch(feed_url).await?;
    let feed = parse_feed(&raw)?;
    Ok(feed)
}

/// Run the full pipeline once.
///
/// 1. Fetch the feed (one request, no retry).
/// 2. Parse it into items.
/// 3. Extract events from the first `item_limit` items, one at a time;
///    failed items are skipped and reported.
/// 4. Write all extracted events to `output_path`.
///
/// # Errors
///
/// - [`PipelineError::Network`] / [`PipelineError::FeedFormat`] end the run
///   before any extraction.
/// - [`PipelineError::Persistence`] is returned after extraction when the
///   write fails; it carries the extracted events and skipped items.
pub async fn run_pipeline<C: StructuredExtractor>(
    fetcher: &FeedFetcher,
    extractor: &EventExtractor<C>,
    options: PipelineOptions<'_>,
) -> Result<PipelineReport, PipelineError> {
    let feed = load_feed(fetcher, options.feed_url).await?;
    let feed_title = feed.title;
    let items_in_feed = feed.items.len();
    tracing::info!(
        feed_url = options.feed_url,
        items = items_in_feed,
        limit = options.item_limit,
        "loaded feed"
    );

    let report = extract_items(extractor, feed.items, options.item_limit).await;
    let items_processed = report.processed();
    let (events, skipped) = report.into_parts();

    if !skipped.is_empty() {
        tracing::warn!(
            skipped = skipped.len(),
            processed = items_processed,
            "some items were skipped"
        );
    }

    if let Err(source) = save_events(&events, options.output_path) {
        return Err(PipelineError::Persistence {
            source,
            events,
            skipped,
        });
    }

    tracing::info!(
        events = events.len(),
        path = %options.output_path.display(),
        "pipeline run complete"
    );

    Ok(PipelineReport {
        feed_title,
        items_in_feed,
        items_processed,
        events,
        skipped,
        output_path: options.output_path.to_path_buf(),
    })
}
