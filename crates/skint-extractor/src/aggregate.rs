//! Per-item extraction with failure isolation.

use crate::chunker::build_prompt;
use crate::extraction::{EventExtractor, StructuredExtractor};
use crate::types::{EventRecord, FeedItem};

/// What happened to one feed item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    Extracted {
        title: String,
        records: Vec<EventRecord>,
    },
    Skipped(SkippedItem),
}

/// An item whose extraction failed, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedItem {
    /// 1-based position of the item in the feed.
    pub position: usize,
    pub title: String,
    pub reason: String,
}

/// Outcomes for every processed item, in feed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateReport {
    pub outcomes: Vec<ItemOutcome>,
}

impl AggregateReport {
    /// Number of items that were attempted.
    #[must_use]
    pub fn processed(&self) -> usize {
        self.outcomes.len()
    }

    /// Items that failed, in feed order.
    #[must_use]
    pub fn skipped(&self) -> Vec<&SkippedItem> {
        self.outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                ItemOutcome::Skipped(skipped) => Some(skipped),
                ItemOutcome::Extracted { .. } => None,
            })
            .collect()
    }

    /// Consume the report, returning all extracted records in feed order
    /// and the skipped items.
    #[must_use]
    pub fn into_parts(self) -> (Vec<EventRecord>, Vec<SkippedItem>) {
        let mut events = Vec::new();
        let mut skipped = Vec::new();
        for outcome in self.outcomes {
            match outcome {
                ItemOutcome::Extracted { records, .. } => events.extend(records),
                ItemOutcome::Skipped(item) => skipped.push(item),
            }
        }
        (events, skipped)
    }
}

/// Extract events from at most `limit` items, strictly in feed order.
///
/// Each item's call completes before the next starts. A failed item is
/// logged and recorded as [`ItemOutcome::Skipped`]; it never aborts the run
/// and contributes no records.
pub async fn extract_items<C: StructuredExtractor>(
    extractor: &EventExtractor<C>,
    items: Vec<FeedItem>,
    limit: usize,
) -> AggregateReport {
    let total = items.len();
    let mut outcomes = Vec::with_capacity(limit.min(total));

    for (index, item) in items.into_iter().take(limit).enumerate() {
        let position = index + 1;
        let prompt = build_prompt(&item);
        tracing::debug!(position, title = %item.title, prompt = %prompt, "built item prompt");

        match extractor.extract(&prompt).await {
            Ok(records) => {
                tracing::info!(
                    position,
                    title = %item.title,
                    count = records.len(),
                    "extracted events from item"
                );
                outcomes.push(ItemOutcome::Extracted {
                    title: item.title,
                    records,
                });
            }
            Err(e) => {
                tracing::warn!(
                    position,
                    title = %item.title,
                    error = %e,
                    "skipping item after extraction failure"
                );
                outcomes.push(ItemOutcome::Skipped(SkippedItem {
                    position,
                    title: item.title,
                    reason: e.to_string(),
                }));
            }
        }
    }

    if total > limit {
        tracing::debug!(total, limit, "item limit reached; remaining items not processed");
    }

    AggregateReport { outcomes }
}

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod tests;
