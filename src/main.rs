use std::process::ExitCode;
use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;
use wikipedia_random::console::{self, DEFAULT_WIDTH};
use wikipedia_random::{Page, WikipediaClient, DEFAULT_LANGUAGE, DEFAULT_TIMEOUT};

/// Print the title and summary of a random Wikipedia article.
#[derive(Parser, Debug)]
#[command(name = "wikipedia-random", version)]
struct Cli {
    /// Language edition of Wikipedia
    #[arg(short, long, value_name = "LANG", default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Request timeout in seconds
    #[arg(short, long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,

    /// Wrap the summary at this many columns
    #[arg(short, long, value_name = "COLS", default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Log more (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

async fn fetch(cli: &Cli) -> wikipedia_random::Result<Page> {
    let client = WikipediaClient::new(Duration::from_secs(cli.timeout))?;
    client.random_page(&cli.language).await
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match fetch(&cli).await {
        Ok(page) => {
            console::print_page(&page, cli.width);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            console::print_error(&e);
            Ok(ExitCode::FAILURE)
        }
    }
}
