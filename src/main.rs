//! Kagami main entry point
//!
//! Command-line interface for the kagami site mirroring crawler.

use clap::Parser;
use kagami::config::{default_config, load_config, Config};
use kagami::crawler::crawl;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Kagami: a single-site mirroring crawler
///
/// Kagami crawls one website from its root URL, rewrites internal links to
/// locally-served paths, and saves the pages into a mirror directory ready
/// to be served as static content.
#[derive(Parser, Debug)]
#[command(name = "kagami")]
#[command(version)]
#[command(about = "Mirror a single website into a static directory tree", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => {
            tracing::info!("No config file given, using built-in defaults");
            default_config()?
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_crawl(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("kagami=info,warn"),
            1 => EnvFilter::new("kagami=debug,info"),
            2 => EnvFilter::new("kagami=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows the crawl plan
fn handle_dry_run(config: &Config) {
    println!("=== Kagami Dry Run ===\n");

    println!("Origin:");
    println!("  Base URL: {}", config.origin.base_url);

    println!("\nCrawler:");
    println!("  Max pages: {}", config.crawler.max_pages);
    println!("  Concurrency: {}", config.crawler.concurrency);

    println!("\nOutput:");
    println!("  Mirror root: {}", config.output.mirror_root);

    println!("\n\u{2713} Configuration is valid");
}

/// Handles the main crawl operation
async fn handle_crawl(config: Config) -> anyhow::Result<()> {
    tracing::info!(
        "Mirroring {} into {} (budget: {} pages, {} workers)",
        config.origin.base_url,
        config.output.mirror_root,
        config.crawler.max_pages,
        config.crawler.concurrency
    );

    let mirror_root = config.output.mirror_root.clone();

    match crawl(config).await {
        Ok(report) => {
            println!(
                "Mirrored {} pages into {}",
                report.pages_processed, mirror_root
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}
