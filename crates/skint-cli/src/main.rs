mod extract;
mod feed;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "skint-cli")]
#[command(about = "Extract structured events from The Skint's RSS feed")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the feed, extract events from its newest posts, and write them as JSON
    Extract {
        /// Number of feed items to send for extraction (overrides `SKINT_ITEM_LIMIT`)
        #[arg(long)]
        limit: Option<usize>,

        /// Where to write the events document (overrides `SKINT_OUTPUT_PATH`)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Feed to read (overrides `SKINT_FEED_URL`)
        #[arg(long)]
        feed_url: Option<String>,

        /// Print the prompt text for each selected item without calling the
        /// extraction provider or writing a file
        #[arg(long)]
        dry_run: bool,

        /// Also print the extracted events as JSON after a successful run
        #[arg(long)]
        print_events: bool,
    },
    /// Print the feed's channel metadata and item titles
    Feed {
        /// Feed to read (overrides `SKINT_FEED_URL`)
        #[arg(long)]
        feed_url: Option<String>,
    },
}

/// Flag values that replace their environment variables when loading config.
fn config_overrides(
    limit: Option<usize>,
    output: Option<PathBuf>,
    feed_url: Option<String>,
) -> Vec<(&'static str, String)> {
    let mut overrides = Vec::new();
    if let Some(limit) = limit {
        overrides.push(("SKINT_ITEM_LIMIT", limit.to_string()));
    }
    if let Some(output) = output {
        overrides.push(("SKINT_OUTPUT_PATH", output.display().to_string()));
    }
    if let Some(feed_url) = feed_url {
        overrides.push(("SKINT_FEED_URL", feed_url));
    }
    overrides
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (overrides, command) = match cli.command {
        Commands::Extract {
            limit,
            output,
            feed_url,
            dry_run,
            print_events,
        } => (
            config_overrides(limit, output, feed_url),
            Command::Extract {
                dry_run,
                print_events,
            },
        ),
        Commands::Feed { feed_url } => (config_overrides(None, None, feed_url), Command::Feed),
    };
    let config = skint_core::load_app_config_with_overrides(&overrides)?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    tracing::debug!(?config, "loaded configuration");

    match command {
        Command::Extract { dry_run: true, .. } => extract::run_extract_dry_run(&config).await?,
        Command::Extract { print_events, .. } => {
            extract::run_extract(&config, print_events).await?;
        }
        Command::Feed => feed::run_feed(&config).await?,
    }

    Ok(())
}

/// What to run once config is loaded.
enum Command {
    Extract { dry_run: bool, print_events: bool },
    Feed,
}

#[cfg(test)]
mod tests;
