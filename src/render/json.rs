//! JSON rendering for bookmark forests.

use crate::error::Result;
use crate::model::BookmarkNode;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a bookmark forest to JSON.
pub fn to_json(nodes: &[BookmarkNode], format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(nodes),
        JsonFormat::Compact => serde_json::to_string(nodes),
    };
    Ok(result?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Bookmark, BookmarkNode, Folder};

    fn sample_forest() -> Vec<BookmarkNode> {
        vec![BookmarkNode::Folder(Folder::with_children(
            "Reading",
            vec![BookmarkNode::Bookmark(Bookmark::new(
                "Example",
                "https://example.com",
            ))],
        ))]
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample_forest(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"type\""));
        assert!(json.contains("Reading"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample_forest(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"type\":\"bookmark\""));
    }
}
