//! Bookmark forest types for sidebar export.
//!
//! This module defines the intermediate representation that bridges sidebar
//! parsing and bookmark rendering. The model is schema-agnostic: it carries
//! no trace of the sidebar shapes it was reconstructed from.

use serde::{Deserialize, Serialize};

/// A single bookmark leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Display title
    pub title: String,

    /// Target URL
    pub url: String,
}

impl Bookmark {
    /// Create a new bookmark.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// Dedup key for sibling bookmarks.
    pub(crate) fn dedup_key(&self) -> (&str, &str) {
        (&self.title, &self.url)
    }
}

/// A folder holding an ordered sequence of children.
///
/// A folder owns its children exclusively. The reconstruction guarantees a
/// tree, never a graph: cycles in the source are cut during assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Display title
    pub title: String,

    /// Children in document order
    pub children: Vec<BookmarkNode>,
}

impl Folder {
    /// Create an empty folder.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
        }
    }

    /// Create a folder with children.
    pub fn with_children(title: impl Into<String>, children: Vec<BookmarkNode>) -> Self {
        Self {
            title: title.into(),
            children,
        }
    }
}

/// One node of the finished bookmark forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BookmarkNode {
    /// An internal folder
    Folder(Folder),
    /// A leaf bookmark
    Bookmark(Bookmark),
}

impl From<Folder> for BookmarkNode {
    fn from(folder: Folder) -> Self {
        BookmarkNode::Folder(folder)
    }
}

impl From<Bookmark> for BookmarkNode {
    fn from(bookmark: Bookmark) -> Self {
        BookmarkNode::Bookmark(bookmark)
    }
}

/// Aggregate counters for one export run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportStats {
    /// Containers present in the document
    pub containers_total: usize,

    /// Containers actually exported
    pub containers_selected: usize,

    /// Spaces found across selected containers
    pub spaces_detected: usize,

    /// Spaces that passed the pin filter and produced output
    pub spaces_included: usize,

    /// Folders in the finished forest
    pub folders: usize,

    /// Bookmarks in the finished forest
    pub tabs: usize,
}

/// Count folders and bookmarks in a forest, depth-first.
pub fn count_nodes(nodes: &[BookmarkNode]) -> (usize, usize) {
    let mut folders = 0;
    let mut tabs = 0;
    for node in nodes {
        walk(node, &mut folders, &mut tabs);
    }
    (folders, tabs)
}

fn walk(node: &BookmarkNode, folders: &mut usize, tabs: &mut usize) {
    match node {
        BookmarkNode::Folder(folder) => {
            *folders += 1;
            for child in &folder.children {
                walk(child, folders, tabs);
            }
        }
        BookmarkNode::Bookmark(_) => *tabs += 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_empty_forest() {
        assert_eq!(count_nodes(&[]), (0, 0));
    }

    #[test]
    fn test_count_nested() {
        let forest = vec![BookmarkNode::Folder(Folder::with_children(
            "Top",
            vec![
                BookmarkNode::Bookmark(Bookmark::new("A", "https://a.example")),
                BookmarkNode::Folder(Folder::with_children(
                    "Inner",
                    vec![BookmarkNode::Bookmark(Bookmark::new(
                        "B",
                        "https://b.example",
                    ))],
                )),
            ],
        ))];
        assert_eq!(count_nodes(&forest), (2, 2));
    }

    #[test]
    fn test_node_json_tagging() {
        let node = BookmarkNode::Bookmark(Bookmark::new("Example", "https://example.com"));
        let json = serde_json::to_string(&node).unwrap();
        assert!(json.contains("\"type\":\"bookmark\""));
        assert!(json.contains("https://example.com"));
    }
}
