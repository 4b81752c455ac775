//! # hn_table
//!
//! Scrapes the Hacker News front page and renders its stories as an HTML
//! table.
//!
//! ## Usage
//!
//! ```sh
//! hn_table                      # writes ./index.html
//! hn_table --format text        # tab-separated dump on stdout
//! ```
//!
//! ## Architecture
//!
//! The application is a straight pipeline, run once:
//! 1. **Fetching**: one HTTP GET for the front page body
//! 2. **Extraction**: parse the body and recover rank, title, link, points
//!    and submitter for every story row
//! 3. **Output**: render an HTML table to a file, or dump the records to stdout
//!
//! Any network failure or layout mismatch aborts the run before output is
//! written.

use clap::Parser;
use std::error::Error;
use std::io;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod error;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::Cli;
use outputs::{Format, html, json, text};
use scrapers::hackernews;
use utils::ensure_parent_dir;

#[tokio::main(flavor = "current_thread")]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so the text and json formats own stdout.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("hn_table starting up");

    let args = Cli::parse();
    debug!(url = %args.url, output = %args.output.display(), format = ?args.format, "Parsed CLI arguments");

    if args.format == Format::Html {
        if let Err(e) = ensure_parent_dir(&args.output).await {
            error!(
                path = %args.output.display(),
                error = %e,
                "Output location is not usable (fix perms or choose a different path)"
            );
            return Err(e);
        }
    }

    // ---- Fetch and extract ----
    let body = hackernews::fetch_front_page(&args.url, args.timeout())
        .await
        .inspect_err(|e| error!(url = %args.url, error = %e, "Fetch failed"))?;

    let articles = hackernews::parse_front_page(&body).inspect_err(|e| {
        error!(
            error = %e,
            structure = e.is_structure(),
            "Extraction failed; page layout may have changed"
        )
    })?;

    // ---- Output ----
    match args.format {
        Format::Html => html::write_table(&articles, &args.url, &args.output).await?,
        Format::Text => text::write_dump(io::stdout().lock(), &articles)?,
        Format::Json => json::write_json(io::stdout().lock(), &articles)?,
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        articles = articles.len(),
        format = ?args.format,
        "Execution complete"
    );

    Ok(())
}
