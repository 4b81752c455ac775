//! HTML table output.
//!
//! Renders the scraped stories as a standalone HTML5 page with a Bootstrap
//! styled table:
//!
//! ```text
//! | rank | title (linked, max 80 chars) | points | submitter |
//! ```
//!
//! The `link` field has no column of its own; it becomes the `href` of the
//! title anchor. The page is rendered fully in memory and written with a
//! single call, so a failed run never leaves a half-written table behind.

use crate::error::Result;
use crate::models::ArticleRecord;
use crate::utils::{TITLE_DISPLAY_LEN, truncate_title};
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::{self, Write};
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};
use url::Url;

const STYLESHEET: &str = "https://cdn.jsdelivr.net/npm/bootstrap@3.4.1/dist/css/bootstrap.min.css";
const PAGE_TITLE: &str = "Hacker News front page";
const FOOTER: &str = "Generated by hn_table";

/// Render the full HTML document for `articles`.
///
/// `source` is the page the stories were scraped from; the caption links to it.
pub fn render_table(articles: &[ArticleRecord], source: &Url) -> Result<String> {
    let mut page = String::new();
    write_page(&mut page, articles, source)?;
    Ok(page)
}

/// Render `articles` and write the document to `path` as UTF-8.
#[instrument(level = "info", skip_all, fields(count = articles.len(), path = %path.display()))]
pub async fn write_table(articles: &[ArticleRecord], source: &Url, path: &Path) -> Result<()> {
    let page = render_table(articles, source)?;
    fs::write(path, page.as_bytes()).await?;
    info!(bytes = page.len(), "Wrote HTML table");
    Ok(())
}

fn write_page(out: &mut String, articles: &[ArticleRecord], source: &Url) -> fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<title>{PAGE_TITLE}</title>")?;
    writeln!(out, "<link rel=\"stylesheet\" href=\"{STYLESHEET}\">")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(
        out,
        "<h3>Articles scraped from <a href=\"{}\">Hacker News</a> front page</h3>",
        encode_double_quoted_attribute(source.as_str())
    )?;
    writeln!(out, "<table class=\"table table-hover\">")?;

    writeln!(out, "<thead>")?;
    write!(out, "<tr>")?;
    for column in ArticleRecord::FIELDS.iter().filter(|c| **c != "link") {
        write!(out, "<th>{column}</th>")?;
    }
    writeln!(out, "</tr>")?;
    writeln!(out, "</thead>")?;

    writeln!(out, "<tbody>")?;
    for article in articles {
        write_row(out, article)?;
    }
    writeln!(out, "</tbody>")?;

    writeln!(out, "</table>")?;
    writeln!(out, "<p>{FOOTER}</p>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

fn write_row(out: &mut String, article: &ArticleRecord) -> fmt::Result {
    let title = truncate_title(&article.title, TITLE_DISPLAY_LEN);
    writeln!(
        out,
        "<tr><td>{}</td><td><a href=\"{}\">{}</a></td><td>{}</td><td>{}</td></tr>",
        encode_text(&article.rank),
        encode_double_quoted_attribute(&article.link),
        encode_text(&title),
        encode_text(&article.points),
        encode_text(&article.submitter),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NO_POINTS, UNKNOWN_SUBMITTER};
    use scraper::{Html, Selector};

    fn source() -> Url {
        Url::parse("https://news.ycombinator.com/").unwrap()
    }

    fn article(title: &str, link: &str) -> ArticleRecord {
        ArticleRecord {
            rank: "1.".to_string(),
            title: title.to_string(),
            link: link.to_string(),
            points: "42 points".to_string(),
            submitter: "pg".to_string(),
        }
    }

    fn select_all(doc: &Html, css: &str) -> Vec<String> {
        let selector = Selector::parse(css).unwrap();
        doc.select(&selector)
            .map(|e| e.text().collect::<String>())
            .collect()
    }

    #[test]
    fn test_header_omits_link_column() {
        let html = render_table(&[], &source()).unwrap();
        let doc = Html::parse_document(&html);
        assert_eq!(
            select_all(&doc, "thead th"),
            vec!["rank", "title", "points", "submitter"]
        );
        assert!(select_all(&doc, "tbody tr").is_empty());
    }

    #[test]
    fn test_row_cells_in_order() {
        let mut job = article("Example is hiring", "https://jobs.example.com");
        job.points = NO_POINTS.to_string();
        job.submitter = UNKNOWN_SUBMITTER.to_string();

        let html = render_table(&[article("Hello", "https://example.com"), job], &source()).unwrap();
        let doc = Html::parse_document(&html);

        let rows = Selector::parse("tbody tr").unwrap();
        let cell = Selector::parse("td").unwrap();
        let cells: Vec<Vec<String>> = doc
            .select(&rows)
            .map(|tr| tr.select(&cell).map(|td| td.text().collect::<String>()).collect())
            .collect();

        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0], vec!["1.", "Hello", "42 points", "pg"]);
        assert_eq!(cells[1], vec!["1.", "Example is hiring", "no points", "unknown"]);
    }

    #[test]
    fn test_title_truncation() {
        let exact = "a".repeat(80);
        let long = format!("{}tail", "b".repeat(80));
        let html = render_table(&[article(&exact, "x"), article(&long, "y")], &source()).unwrap();
        let doc = Html::parse_document(&html);

        let titles = select_all(&doc, "tbody a");
        assert_eq!(titles[0], exact);
        assert_eq!(titles[1], format!("{}...", "b".repeat(80)));
    }

    #[test]
    fn test_href_round_trips() {
        let links = [
            "https://example.com/search?q=rust&lang=en",
            "item?id=123",
            r#"https://example.com/"quoted"/<path>"#,
            "",
        ];
        let articles: Vec<ArticleRecord> = links.iter().map(|l| article("t", l)).collect();
        let html = render_table(&articles, &source()).unwrap();
        let doc = Html::parse_document(&html);

        let anchor = Selector::parse("tbody a").unwrap();
        let hrefs: Vec<&str> = doc
            .select(&anchor)
            .map(|a| a.value().attr("href").unwrap())
            .collect();
        assert_eq!(hrefs, links);
    }

    #[test]
    fn test_text_is_escaped() {
        let mut hostile = article("<script>alert(1)</script> & more", "x");
        hostile.submitter = "<b>bold</b>".to_string();
        let html = render_table(&[hostile], &source()).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));

        let doc = Html::parse_document(&html);
        assert_eq!(select_all(&doc, "tbody a")[0], "<script>alert(1)</script> & more");
        assert!(select_all(&doc, "tbody b").is_empty());
    }

    #[test]
    fn test_caption_and_footer() {
        let html = render_table(&[], &source()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<meta charset=\"utf-8\">"));
        assert!(html.contains("href=\"https://news.ycombinator.com/\">Hacker News</a>"));
        assert!(html.contains(FOOTER));
    }

    #[tokio::test]
    async fn test_write_table_writes_one_file() {
        let dir = std::env::temp_dir().join(format!("hn_table_html_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("index.html");

        let articles = vec![article("Ünïcödé title", "https://example.com")];
        write_table(&articles, &source(), &path).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_table(&articles, &source()).unwrap());
        assert!(written.contains("Ünïcödé title"));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
