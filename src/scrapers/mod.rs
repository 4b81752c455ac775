//! Front page scrapers.
//!
//! A scraper has two steps:
//!
//! 1. **Fetching**: download the page body with a single HTTP GET
//! 2. **Extraction**: parse the body and recover one record per story
//!
//! # Supported Sources
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | Hacker News | [`hackernews`] | HTML scraping | Positional: third table, three rows per story |

pub mod hackernews;
