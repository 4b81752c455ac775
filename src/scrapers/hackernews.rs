//! Hacker News front page scraper.
//!
//! The front page is one big layout table. Stories live in the third `<table>`
//! of the document (the first two are the page frame and the header bar), and
//! each story occupies three consecutive rows:
//!
//! ```text
//! <tr class="athing">  rank cell, vote cell, title cell      (story row)
//! <tr>                 score, submitter, age, comments      (metadata row)
//! <tr class="spacer">  empty                                (spacer row)
//! ```
//!
//! After the last story the page has a styled spacer followed by the "More"
//! link row, which falls into its own group and is filtered out.
//!
//! These positions are a fixed contract with the site's markup. When the site
//! changes layout, extraction fails with a structure error instead of guessing.

use crate::error::{Result, ScrapeError};
use crate::models::{ArticleRecord, NO_POINTS, UNKNOWN_SUBMITTER};
use crate::utils::truncate_for_log;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use tracing::{debug, info, instrument};
use url::Url;

/// Position of the story table among all `<table>` elements.
const NEWS_TABLE_INDEX: usize = 2;

/// Rows per story: story, metadata, spacer.
const ROWS_PER_STORY: usize = 3;

static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").unwrap());
static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").unwrap());
static TITLE_CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td.title").unwrap());
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());
static SPAN_WITH_ID: Lazy<Selector> = Lazy::new(|| Selector::parse("span[id]").unwrap());
static ANCHOR_WITH_HREF: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());

static SCORE_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^score_\d+").unwrap());
static USER_HREF: Lazy<Regex> = Lazy::new(|| Regex::new(r"user\?id=.*").unwrap());

/// Download the front page body.
///
/// The client lives only for this call, so the connection is released once the
/// body has been read. Non-success statuses are reported as fetch errors.
pub async fn fetch_front_page(url: &Url, timeout: Duration) -> Result<String> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    fetch_with(&client, url).await
}

#[instrument(level = "info", skip_all, fields(%url))]
async fn fetch_with(client: &reqwest::Client, url: &Url) -> Result<String> {
    let response = client.get(url.clone()).send().await?.error_for_status()?;
    let status = response.status();
    let body = response.text().await?;

    info!(%status, bytes = body.len(), "Fetched front page");
    debug!(preview = %truncate_for_log(&body, 200), "Front page body");
    Ok(body)
}

/// Parse a raw HTML body and extract its stories.
pub fn parse_front_page(html: &str) -> Result<Vec<ArticleRecord>> {
    let document = Html::parse_document(html);
    extract_articles(&document)
}

/// Extract every story from a parsed front page, in display order.
///
/// # Errors
///
/// Returns a structure error when the third table is missing, or when a story
/// row lacks its two title cells or its title anchor.
#[instrument(level = "info", skip_all)]
pub fn extract_articles(document: &Html) -> Result<Vec<ArticleRecord>> {
    let tables: Vec<ElementRef> = document.select(&TABLE).collect();
    let news_table = tables
        .get(NEWS_TABLE_INDEX)
        .ok_or(ScrapeError::MissingNewsTable {
            found: tables.len(),
        })?;

    let rows: Vec<ElementRef> = news_table.select(&ROW).collect();
    debug!(tables = tables.len(), rows = rows.len(), "Located story table");

    let mut articles = Vec::new();
    let mut skipped = 0usize;
    for (group, chunk) in rows.chunks(ROWS_PER_STORY).enumerate() {
        let [story, meta, ..] = chunk else {
            debug!(group, "Dropping trailing group without metadata row");
            break;
        };

        if !is_story_row(story) {
            skipped += 1;
            continue;
        }

        let row = group * ROWS_PER_STORY;
        articles.push(parse_item(*story, *meta, row)?);
    }

    info!(count = articles.len(), skipped, "Extracted front page articles");
    Ok(articles)
}

/// A story row has at least one cell and no inline style. The styled row is
/// the spacer in front of the "More" link.
fn is_story_row(row: &ElementRef) -> bool {
    row.select(&CELL).next().is_some() && row.value().attr("style").is_none()
}

/// Build one record from a story row and the metadata row below it.
fn parse_item(story: ElementRef, meta: ElementRef, row: usize) -> Result<ArticleRecord> {
    let title_cells: Vec<ElementRef> = story.select(&TITLE_CELL).collect();
    let [rank_cell, title_cell, ..] = title_cells.as_slice() else {
        return Err(ScrapeError::MissingTitleCells {
            row,
            found: title_cells.len(),
        });
    };

    let anchor = title_cell
        .select(&ANCHOR)
        .next()
        .ok_or(ScrapeError::MissingTitleAnchor { row })?;

    let rank = text_of(rank_cell);
    let title = text_of(&anchor);
    let link = anchor.value().attr("href").unwrap_or_default().to_string();

    let points = meta
        .select(&SPAN_WITH_ID)
        .find(|span| span.value().id().is_some_and(|id| SCORE_ID.is_match(id)))
        .map(|span| text_of(&span))
        .unwrap_or_else(|| {
            debug!(row, %rank, "No score element; using sentinel");
            NO_POINTS.to_string()
        });

    let submitter = meta
        .select(&ANCHOR_WITH_HREF)
        .find(|a| a.value().attr("href").is_some_and(|href| USER_HREF.is_match(href)))
        .map(|a| text_of(&a))
        .unwrap_or_else(|| {
            debug!(row, %rank, "No submitter link; using sentinel");
            UNKNOWN_SUBMITTER.to_string()
        });

    Ok(ArticleRecord {
        rank,
        title,
        link,
        points,
        submitter,
    })
}

fn text_of(element: &ElementRef) -> String {
    element.text().collect()
}
