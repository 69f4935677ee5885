//! `extract` command handlers.

use skint_core::AppConfig;
use skint_extractor::{
    build_prompt, load_feed, run_pipeline, EventExtractor, EventRecord, FeedFetcher,
    OpenAiExtractor, PipelineError, PipelineOptions, PipelineReport, SkippedItem,
};

pub(crate) fn build_fetcher(config: &AppConfig) -> anyhow::Result<FeedFetcher> {
    Ok(FeedFetcher::new(config.http_timeout_secs, &config.user_agent)?)
}

/// Run the full pipeline and print a summary, followed by the events
/// themselves when `print_events` is set.
///
/// # Errors
///
/// Returns an error if `OPENAI_API_KEY` is unset, the feed cannot be fetched
/// or parsed, or the events file cannot be written. In the last case the
/// extracted events are printed to stdout first.
pub(crate) async fn run_extract(config: &AppConfig, print_events: bool) -> anyhow::Result<()> {
    let api_key = config.require_openai_api_key()?;
    let fetcher = build_fetcher(config)?;
    let provider = OpenAiExtractor::with_base_url(
        api_key,
        &config.openai_model,
        config.extraction_timeout_secs,
        &config.openai_base_url,
    )?;
    let extractor = EventExtractor::new(provider);

    let options = PipelineOptions {
        feed_url: &config.feed_url,
        item_limit: config.item_limit,
        output_path: &config.output_path,
    };

    match run_pipeline(&fetcher, &extractor, options).await {
        Ok(report) => {
            print_summary(&report);
            if print_events {
                println!("{}", render_events(&report.events)?);
            }
            Ok(())
        }
        Err(PipelineError::Persistence {
            source,
            events,
            skipped,
        }) => {
            eprintln!("could not write {}: {source}", config.output_path.display());
            eprintln!("extracted events follow on stdout");
            println!("{}", render_events(&events)?);
            print_skipped(&skipped);
            Err(PipelineError::Persistence {
                source,
                events,
                skipped,
            }
            .into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Fetch and parse the feed, then print the prompt for each item that a real
/// run would send.
///
/// # Errors
///
/// Returns an error if the feed cannot be fetched or parsed.
pub(crate) async fn run_extract_dry_run(config: &AppConfig) -> anyhow::Result<()> {
    let fetcher = build_fetcher(config)?;
    let feed = load_feed(&fetcher, &config.feed_url).await?;

    let selected = feed.items.len().min(config.item_limit);
    println!(
        "dry-run: would extract from {selected} of {} items in {}",
        feed.items.len(),
        config.feed_url
    );
    for (index, item) in feed.items.iter().take(config.item_limit).enumerate() {
        println!("\n--- item {} ---", index + 1);
        println!("{}", build_prompt(item));
    }
    Ok(())
}

/// `Extracted N events:` followed by the pretty-printed array.
pub(crate) fn render_events(events: &[EventRecord]) -> serde_json::Result<String> {
    Ok(format!(
        "Extracted {} events:\n{}",
        events.len(),
        serde_json::to_string_pretty(events)?
    ))
}

fn print_summary(report: &PipelineReport) {
    println!(
        "extracted {} events from {} of {} items; wrote {}",
        report.events.len(),
        report.items_processed,
        report.items_in_feed,
        report.output_path.display()
    );
    print_skipped(&report.skipped);
}

fn print_skipped(skipped: &[SkippedItem]) {
    if skipped.is_empty() {
        return;
    }
    println!("skipped {} items:", skipped.len());
    for item in skipped {
        println!("  #{} {}: {}", item.position, item.title, item.reason);
    }
}
