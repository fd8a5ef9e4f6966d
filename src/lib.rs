//! # arc-export
//!
//! Export Arc Browser spaces, folders, and tabs to Netscape bookmarks HTML.
//!
//! Arc keeps its sidebar in `StorableSidebar.json`, a deeply nested and
//! loosely structured document whose schema changes between versions. This
//! library reconstructs a strict bookmark tree from that document with
//! best-effort heuristics and renders it as a standard bookmarks file any
//! browser can import.
//!
//! ## Quick Start
//!
//! ```no_run
//! use arc_export::ArcExport;
//!
//! fn main() -> arc_export::Result<()> {
//!     let result = ArcExport::new()
//!         .include_unpinned(true)
//!         .parse_file("StorableSidebar.json")?;
//!
//!     println!("{} tabs in {} folders", result.stats.tabs, result.stats.folders);
//!     std::fs::write("bookmarks.html", result.to_netscape_html())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Design
//!
//! - **Fail-soft parsing**: malformed nodes, dangling parents, cyclic
//!   parent references, and unknown schema shapes all degrade to "this
//!   node contributes nothing". Only boundary failures (I/O, invalid JSON)
//!   are errors.
//! - **Order preservation**: the position of each item in the original
//!   flat list is the only sibling-ordering signal and is carried through
//!   to the output.

pub mod discover;
pub mod error;
pub mod model;
pub mod render;
pub mod sidebar;

// Re-export commonly used types
pub use discover::default_sidebar_path;
pub use error::{Error, Result};
pub use model::{count_nodes, Bookmark, BookmarkNode, ExportStats, Folder};
pub use render::{to_json, to_netscape_html, JsonFormat};
pub use sidebar::{parse_sidebar, ExportOptions};

use std::fs;
use std::path::Path;

use serde_json::Value;

/// Read and parse a sidebar JSON document from disk.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Value> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write rendered output wholesale to `path`.
pub fn write_text<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    fs::write(&path, contents).map_err(|source| Error::WriteOutput {
        path: path.as_ref().display().to_string(),
        source,
    })
}

/// Parse a sidebar document already in memory.
///
/// Never fails; an unrecognizable document yields an empty forest and
/// zeroed stats.
pub fn parse_value(doc: &Value, options: &ExportOptions) -> (Vec<BookmarkNode>, ExportStats) {
    parse_sidebar(doc, options)
}

/// Parse a sidebar document from a JSON string.
pub fn parse_str(json: &str, options: &ExportOptions) -> Result<(Vec<BookmarkNode>, ExportStats)> {
    let doc: Value = serde_json::from_str(json)?;
    Ok(parse_sidebar(&doc, options))
}

/// Load a sidebar file and parse it in one step.
pub fn export_file<P: AsRef<Path>>(path: P, options: &ExportOptions) -> Result<ExportResult> {
    let doc = load_document(path)?;
    let (nodes, stats) = parse_sidebar(&doc, options);
    Ok(ExportResult { nodes, stats })
}

/// Builder for configuring and running a sidebar export.
///
/// # Example
///
/// ```no_run
/// use arc_export::ArcExport;
///
/// let html = ArcExport::new()
///     .all_containers(true)
///     .parse_file("StorableSidebar.json")?
///     .to_netscape_html();
/// # Ok::<(), arc_export::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArcExport {
    options: ExportOptions,
}

impl ArcExport {
    /// Create a new export builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Include spaces explicitly marked unpinned.
    pub fn include_unpinned(mut self, include: bool) -> Self {
        self.options = self.options.include_unpinned(include);
        self
    }

    /// Export every container, not just the default profile container.
    pub fn all_containers(mut self, all: bool) -> Self {
        self.options = self.options.all_containers(all);
        self
    }

    /// Parse a sidebar file.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<ExportResult> {
        export_file(path, &self.options)
    }

    /// Parse a sidebar document from a JSON string.
    pub fn parse_str(self, json: &str) -> Result<ExportResult> {
        let (nodes, stats) = parse_str(json, &self.options)?;
        Ok(ExportResult { nodes, stats })
    }

    /// Parse a sidebar document already in memory.
    pub fn parse_value(self, doc: &Value) -> ExportResult {
        let (nodes, stats) = parse_sidebar(doc, &self.options);
        ExportResult { nodes, stats }
    }
}

/// A finished export: the bookmark forest plus its statistics.
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// The reconstructed bookmark forest
    pub nodes: Vec<BookmarkNode>,

    /// Counters for the run
    pub stats: ExportStats,
}

impl ExportResult {
    /// True when nothing exportable was found.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Render to Netscape bookmark HTML.
    pub fn to_netscape_html(&self) -> String {
        render::to_netscape_html(&self.nodes)
    }

    /// Serialize the forest to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.nodes, format)
    }
}
