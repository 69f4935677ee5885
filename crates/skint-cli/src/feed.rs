//! `feed` command handler: a quick look at what the feed currently holds.

use skint_core::AppConfig;
use skint_extractor::load_feed;

use crate::extract::build_fetcher;

pub(crate) async fn run_feed(config: &AppConfig) -> anyhow::Result<()> {
    let fetcher = build_fetcher(config)?;
    let feed = load_feed(&fetcher, &config.feed_url).await?;

    println!("{}", feed.title.as_deref().unwrap_or("(untitled feed)"));
    if let Some(link) = feed.link.as_deref() {
        println!("{link}");
    }
    if let Some(description) = feed.description.as_deref() {
        println!("{description}");
    }
    if let Some(updated) = feed.last_build_date.as_deref() {
        println!("last build: {updated}");
    }

    println!("\n{} items", feed.items.len());
    for (index, item) in feed.items.iter().enumerate() {
        println!("{:>3}. {}", index + 1, item.title);
        if !item.link.is_empty() {
            println!("     {}", item.link);
        }
    }
    Ok(())
}
