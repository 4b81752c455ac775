//! Error taxonomy for the scrape pipeline.
//!
//! Every variant is fatal: the page layout is treated as a fixed contract with
//! the source site, so a missing table or cell means the layout changed and no
//! partial output should be produced. Absent score or submitter fields are not
//! errors; they resolve to sentinel values in [`crate::models`].

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// Network failure or non-success HTTP status.
    #[error("failed to fetch front page: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The page has fewer than three `<table>` elements.
    #[error("expected at least 3 tables on the page, found {found}")]
    MissingNewsTable { found: usize },

    /// A story row without both `td.title` cells.
    #[error("story row {row} has {found} title cells, expected 2")]
    MissingTitleCells { row: usize, found: usize },

    /// The second title cell of a story row holds no anchor.
    #[error("story row {row} has no title anchor")]
    MissingTitleAnchor { row: usize },

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize articles: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to render table: {0}")]
    Render(#[from] std::fmt::Error),
}

impl ScrapeError {
    /// True for errors that mean the source page layout no longer matches.
    pub fn is_structure(&self) -> bool {
        matches!(
            self,
            ScrapeError::MissingNewsTable { .. }
                | ScrapeError::MissingTitleCells { .. }
                | ScrapeError::MissingTitleAnchor { .. }
        )
    }
}
