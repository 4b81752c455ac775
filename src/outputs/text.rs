//! Plain-text dump for inspecting scrape results.
//!
//! One line per story, fields in declaration order and separated by tabs.
//! Titles are not truncated and nothing is escaped.

use crate::models::ArticleRecord;
use std::io::{self, Write};

pub fn write_dump<W: Write>(mut out: W, articles: &[ArticleRecord]) -> io::Result<()> {
    for article in articles {
        writeln!(out, "{}", article.values().join("\t"))?;
    }
    out.flush()
}
