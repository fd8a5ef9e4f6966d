//! Netscape bookmark file rendering.
//!
//! The Netscape format is the interchange HTML that every major browser's
//! bookmark importer accepts: a fixed header, then nested `<DL><p>` blocks
//! with `<H3>` folder headings and `<A HREF>` leaves. Indentation is
//! cosmetic; importers ignore it.

use crate::model::BookmarkNode;

const HEADER: [&str; 5] = [
    "<!DOCTYPE NETSCAPE-Bookmark-file-1>",
    "<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">",
    "<TITLE>Bookmarks</TITLE>",
    "<H1>Bookmarks</H1>",
    "<DL><p>",
];

/// Render a bookmark forest to Netscape bookmark HTML.
///
/// The output always ends with a trailing newline.
pub fn to_netscape_html(nodes: &[BookmarkNode]) -> String {
    let mut lines: Vec<String> = HEADER.iter().map(|line| line.to_string()).collect();
    render_nodes(nodes, 1, &mut lines);
    lines.push("</DL><p>".to_string());
    let mut output = lines.join("\n");
    output.push('\n');
    output
}

fn render_nodes(nodes: &[BookmarkNode], depth: usize, lines: &mut Vec<String>) {
    let indent = "    ".repeat(depth);
    for node in nodes {
        match node {
            BookmarkNode::Folder(folder) => {
                lines.push(format!("{indent}<DT><H3>{}</H3>", escape_text(&folder.title)));
                lines.push(format!("{indent}<DL><p>"));
                render_nodes(&folder.children, depth + 1, lines);
                lines.push(format!("{indent}</DL><p>"));
            }
            BookmarkNode::Bookmark(bookmark) => {
                lines.push(format!(
                    "{indent}<DT><A HREF=\"{}\">{}</A>",
                    escape_attr(&bookmark.url),
                    escape_text(&bookmark.title)
                ));
            }
        }
    }
}

/// Escape for element text: `&`, `<`, `>`.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escape for attribute values: element-text escapes plus quotes.
fn escape_attr(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
