//! Data model for scraped front-page stories.
//!
//! - [`ArticleRecord`]: one story as displayed on the front page
//! - [`NO_POINTS`] / [`UNKNOWN_SUBMITTER`]: sentinels for optional fields

use serde::Serialize;

/// Points value used when a story has no score element (job postings, fresh stories).
pub const NO_POINTS: &str = "no points";

/// Submitter value used when the metadata row has no user link.
pub const UNKNOWN_SUBMITTER: &str = "unknown";

/// A single story scraped from the front page.
///
/// Records are built once by the extractor and only read afterwards. The
/// title is stored untruncated; shortening for display happens in the
/// renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleRecord {
    /// Rank as displayed, including the trailing dot (e.g. `"1."`).
    pub rank: String,
    /// Full title text of the story anchor.
    pub title: String,
    /// The anchor's `href`, verbatim, or empty when the anchor has none.
    pub link: String,
    /// Score text such as `"42 points"`, or [`NO_POINTS`].
    pub points: String,
    /// Username of the submitter, or [`UNKNOWN_SUBMITTER`].
    pub submitter: String,
}

impl ArticleRecord {
    /// Field names in declaration order.
    pub const FIELDS: [&'static str; 5] = ["rank", "title", "link", "points", "submitter"];

    /// Field values in the same order as [`ArticleRecord::FIELDS`].
    pub fn values(&self) -> [&str; 5] {
        [
            self.rank.as_str(),
            self.title.as_str(),
            self.link.as_str(),
            self.points.as_str(),
            self.submitter.as_str(),
        ]
    }
}
