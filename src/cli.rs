//! Command-line interface definitions for hn_table.
//!
//! Every option has a default, so running the binary with no arguments
//! scrapes the live front page into `index.html`.

use crate::outputs::Format;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Scrape the Hacker News front page into an HTML table.
///
/// # Examples
///
/// ```sh
/// # Default: write ./index.html
/// hn_table
///
/// # Inspect the scraped records without writing a file
/// hn_table --format text
///
/// # Different output location and a shorter timeout
/// hn_table -o public/hn.html --timeout-secs 10
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Front page to scrape
    #[arg(short, long, env = "HN_TABLE_URL", default_value = "https://news.ycombinator.com/")]
    pub url: Url,

    /// Output file for the HTML table
    #[arg(short, long, default_value = "index.html")]
    pub output: PathBuf,

    /// Output format; `text` and `json` print to standard output
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    pub format: Format,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

impl Cli {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
