//! Output renderers for scraped stories.
//!
//! # Submodules
//!
//! - [`html`]: styled HTML table written to a file (the default output)
//! - [`text`]: tab-separated plain dump to standard output, for debugging
//! - [`json`]: JSON array dump to standard output

pub mod html;
pub mod json;
pub mod text;

use clap::ValueEnum;

/// Which renderer to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Styled HTML table written to the output file.
    #[default]
    Html,
    /// Tab-separated lines on standard output.
    Text,
    /// JSON array on standard output.
    Json,
}
