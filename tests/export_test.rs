//! Integration tests against a known-good synthetic sidebar document.

use arc_export::{
    parse_str, parse_value, to_netscape_html, ArcExport, Bookmark, BookmarkNode, ExportOptions,
    Folder,
};
use serde_json::{json, Value};

fn synthetic_sidebar() -> Value {
    json!({
        "root": {
            "sidebar": {
                "containers": [
                    {
                        "items": [
                            {
                                "id": "space_root",
                                "title": "Space One",
                                "data": {"itemContainer": {}},
                                "parentID": null,
                            },
                            {
                                "id": "list1",
                                "title": "Reading",
                                "data": {"list": {}},
                                "parentID": "space_root",
                            },
                            {
                                "id": "tab1",
                                "data": {
                                    "tab": {
                                        "savedURL": "https://example.com",
                                        "savedTitle": "Example",
                                    }
                                },
                                "parentID": "list1",
                            },
                            {
                                "id": "tab2",
                                "data": {
                                    "tab": {
                                        "savedURL": "https://example.org",
                                        "savedTitle": "Example Org",
                                    }
                                },
                                "parentID": "list1",
                            },
                        ]
                    }
                ]
            }
        }
    })
}

fn expect_folder(node: &BookmarkNode) -> &Folder {
    match node {
        BookmarkNode::Folder(folder) => folder,
        BookmarkNode::Bookmark(bookmark) => {
            panic!("expected a folder, got bookmark {:?}", bookmark)
        }
    }
}

fn expect_bookmark(node: &BookmarkNode) -> &Bookmark {
    match node {
        BookmarkNode::Bookmark(bookmark) => bookmark,
        BookmarkNode::Folder(folder) => panic!("expected a bookmark, got folder {:?}", folder),
    }
}

#[test]
fn parses_fixture_tree() {
    let (nodes, stats) = parse_value(&synthetic_sidebar(), &ExportOptions::default());
    assert_eq!(stats.tabs, 2);
    assert_eq!(nodes.len(), 1);

    let root = expect_folder(&nodes[0]);
    assert_eq!(root.title, "Arc Export (Container 1)");
    assert_eq!(root.children.len(), 1);

    let space = expect_folder(&root.children[0]);
    assert_eq!(space.title, "Space One");
    assert_eq!(space.children.len(), 1);

    let reading = expect_folder(&space.children[0]);
    assert_eq!(reading.title, "Reading");
    assert_eq!(reading.children.len(), 2);

    assert_eq!(expect_bookmark(&reading.children[0]).url, "https://example.com");
    assert_eq!(expect_bookmark(&reading.children[1]).url, "https://example.org");
}

#[test]
fn renders_fixture_html() {
    let (nodes, _) = parse_value(&synthetic_sidebar(), &ExportOptions::default());
    let html = to_netscape_html(&nodes);

    assert!(html.contains("<H3>Arc Export (Container 1)</H3>"));
    assert!(html.contains("<H3>Space One</H3>"));
    assert!(html.contains("<H3>Reading</H3>"));
    assert!(html.contains("<A HREF=\"https://example.com\">Example</A>"));
    assert!(html.contains("<A HREF=\"https://example.org\">Example Org</A>"));
}

#[test]
fn fixture_order_matches_input_order() {
    let (nodes, _) = parse_value(&synthetic_sidebar(), &ExportOptions::default());
    let html = to_netscape_html(&nodes);
    let first = html.find("https://example.com").unwrap();
    let second = html.find("https://example.org").unwrap();
    assert!(first < second);
}

#[test]
fn document_without_containers_is_cleanly_empty() {
    let (nodes, stats) = parse_value(&json!({"unrelated": [1, 2, 3]}), &ExportOptions::default());
    assert!(nodes.is_empty());
    assert_eq!(stats.folders, 0);
    assert_eq!(stats.tabs, 0);
}

#[test]
fn unpinned_space_requires_opt_in() {
    let doc = json!({
        "containers": [{
            "items": [
                {"id": "root", "title": "Weekend Root", "data": {"itemContainer": {}}},
                {"id": "t1", "parentID": "root",
                 "data": {"tab": {"savedURL": "https://b.example", "savedTitle": "B"}}},
                {"id": "t2", "parentID": "root",
                 "data": {"tab": {"savedURL": "https://a.example", "savedTitle": "A"}}},
            ],
            "spaces": [{"title": "Weekend", "isPinned": false, "rootID": "root"}]
        }]
    });

    let (nodes, _) = parse_value(&doc, &ExportOptions::default());
    let top = expect_folder(&nodes[0]);
    assert_eq!(top.title, "Arc Export (Container 1)");

    let (nodes, stats) = parse_value(&doc, &ExportOptions::new().include_unpinned(true));
    assert_eq!(stats.spaces_included, 1);
    let space = expect_folder(&nodes[0]);
    assert_eq!(space.title, "Weekend");
    // Root ordering inside the space is the original document order.
    let root = expect_folder(&space.children[0]);
    assert_eq!(expect_bookmark(&root.children[0]).url, "https://b.example");
    assert_eq!(expect_bookmark(&root.children[1]).url, "https://a.example");
}

#[test]
fn cyclic_parents_terminate() {
    let json = r#"{
        "containers": [{
            "items": [
                {"id": "a", "parentID": "b", "data": {"list": {}}, "title": "A"},
                {"id": "b", "parentID": "a", "data": {"list": {}}, "title": "B"}
            ]
        }]
    }"#;
    let (nodes, stats) = parse_str(json, &ExportOptions::default()).unwrap();
    // Both nodes are each other's parent; neither is a root, so the
    // container contributes nothing, and nothing loops forever.
    assert!(nodes.is_empty());
    assert_eq!(stats.containers_selected, 1);
}

#[test]
fn export_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("StorableSidebar.json");
    std::fs::write(&input, synthetic_sidebar().to_string()).unwrap();

    let result = ArcExport::new().parse_file(&input).unwrap();
    assert_eq!(result.stats.tabs, 2);
    assert!(!result.is_empty());

    let output = dir.path().join("bookmarks.html");
    arc_export::write_text(&output, &result.to_netscape_html()).unwrap();
    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("<!DOCTYPE NETSCAPE-Bookmark-file-1>"));
    assert!(written.ends_with('\n'));
}
