//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `title_resolver` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use title_resolver::app::{collect_urls, render};
use title_resolver::config::Opt;
use title_resolver::initialization::init_logger_with;
use title_resolver::{HttpTransport, TitleResolver};

#[tokio::main]
async fn main() {
    let opt = Opt::parse();

    if let Err(e) = run(opt).await {
        eprintln!("title_resolver error: {:#}", e);
        process::exit(1);
    }
}

async fn run(opt: Opt) -> Result<()> {
    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let config = opt.to_config().context("Failed to load configuration")?;
    let urls = collect_urls(&opt.urls, opt.file.as_deref()).await?;
    if urls.is_empty() {
        log::warn!("No URLs given; pass them as arguments or with --file");
    }

    let transport =
        HttpTransport::from_config(&config).context("Failed to initialize HTTP client")?;
    let resolver = TitleResolver::new(transport, config.credentials.clone())
        .with_max_concurrency(config.max_concurrency);

    let infos = resolver.resolve_titles(urls.iter().cloned()).await;

    let rendered = render(opt.output, &urls, &infos)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    if !infos.error_summary.is_empty() {
        eprintln!(
            "Resolved {} of {} URL{}; failures: {}",
            infos.mapping.len(),
            urls.len(),
            if urls.len() == 1 { "" } else { "s" },
            infos.error_summary
        );
    }

    Ok(())
}
