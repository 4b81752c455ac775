//! Helpers for string shortening and output file preparation.

use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument};

/// Maximum number of characters of a title shown in the rendered table.
pub const TITLE_DISPLAY_LEN: usize = 80;

/// Shorten a title for display.
///
/// Titles of at most `max` characters are returned unchanged. Longer titles
/// keep their first `max` characters and get `"..."` appended. Lengths are
/// counted in `char`s so multi-byte titles are never split mid-character.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_title("short", 80), "short");
/// assert_eq!(truncate_title("abcdef", 3), "abc...");
/// ```
pub fn truncate_title(title: &str, max: usize) -> String {
    match title.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &title[..cut]),
        None => title.to_string(),
    }
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to `max` characters with an ellipsis and
/// byte count indicator appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
        None => s.to_string(),
    }
}

/// Make sure the directory that will hold `path` exists.
///
/// Run before the fetch so an unusable output location fails fast instead of
/// after the page has been downloaded and parsed.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or if it
/// exists but is not a directory.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_parent_dir(path: &Path) -> Result<(), Box<dyn Error>> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        debug!("Output path has no parent component; using working directory");
        return Ok(());
    };

    fs::create_dir_all(parent).await?;
    let meta = fs::metadata(parent).await?;
    if !meta.is_dir() {
        return Err(format!("{} is not a directory", parent.display()).into());
    }
    info!(dir = %parent.display(), "Output directory is ready");
    Ok(())
}
