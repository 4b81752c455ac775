//! JSON dump of the scraped stories.
//!
//! Serializes the records as a pretty-printed array, one object per story
//! with the fields `rank`, `title`, `link`, `points` and `submitter`.

use crate::error::Result;
use crate::models::ArticleRecord;
use std::io::Write;
use tracing::{debug, instrument};

/// Write `articles` as a JSON array to `out`, followed by a newline.
#[instrument(level = "debug", skip_all, fields(count = articles.len()))]
pub fn write_json<W: Write>(mut out: W, articles: &[ArticleRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, articles)?;
    writeln!(out)?;
    out.flush()?;
    debug!("Wrote JSON dump");
    Ok(())
}
