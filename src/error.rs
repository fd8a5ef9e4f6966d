//! Error types for the arc-export library.

use std::io;
use thiserror::Error;

/// Result type alias for arc-export operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during an export run.
///
/// Only boundary failures are errors. Everything inside the sidebar
/// heuristics (missing keys, wrong types, cyclic parents, unknown shapes)
/// degrades to "contributes nothing" instead of failing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid JSON.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// No sidebar file was given and none could be discovered.
    #[error(
        "Could not find Arc sidebar data (StorableSidebar.json). \
         Open Arc, locate StorableSidebar.json in your profile data, \
         then rerun with --input /path/to/StorableSidebar.json."
    )]
    SidebarNotFound,

    /// The document parsed cleanly but produced no exportable items.
    #[error("No exportable items found in the sidebar data")]
    NothingExportable,

    /// Error while writing the rendered output.
    #[error("Failed to write output {path}: {source}")]
    WriteOutput {
        /// Destination path that could not be written.
        path: String,
        /// Underlying I/O failure.
        source: io::Error,
    },
}
