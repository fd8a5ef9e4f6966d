//! Tree reconstruction from the flat node table.
//!
//! Recovers a strict folder/bookmark forest from the id graph. Parent links
//! in real sidebar files can dangle, cycle, or point at noise, so assembly
//! is fail-soft throughout: any node that cannot be interpreted contributes
//! nothing.

use std::collections::HashSet;

use serde_json::Value;

use super::options::ExportOptions;
use super::table::{NodeTable, SidebarNode};
use crate::model::{Bookmark, BookmarkNode, Folder};

/// Presence of any of these keys in a node's payload marks it folder-like.
const FOLDER_KEYS: [&str; 3] = ["list", "tabGroup", "itemContainer"];

/// URL fields of a tab payload, in preference order.
const TAB_URL_KEYS: [&str; 3] = ["savedURL", "url", "URL"];

/// Pin-status fields of a space, in preference order.
const PIN_KEYS: [&str; 4] = ["isPinned", "pinned", "isPinnedSpace", "is_pinned"];

/// Direct root-id fields of a space. Casing and plurality vary across
/// sidebar versions, so every observed spelling is tried.
const SPACE_ROOT_KEYS: [&str; 14] = [
    "itemContainerId",
    "itemContainerID",
    "itemContainerIds",
    "itemContainerIDs",
    "rootItemContainerId",
    "rootItemContainerID",
    "rootItemId",
    "rootItemID",
    "rootItemIds",
    "rootItemIDs",
    "rootId",
    "rootID",
    "rootIds",
    "rootIDs",
];

fn is_folder_like(node: &SidebarNode<'_>) -> bool {
    node.data
        .is_some_and(|data| FOLDER_KEYS.iter().any(|key| data.contains_key(*key)))
}

/// Interpret a node as a tab, if its payload carries a usable URL.
fn tab_info(node: &SidebarNode<'_>) -> Option<Bookmark> {
    let tab = node.data_get("tab")?.as_object()?;
    let url = TAB_URL_KEYS.iter().find_map(|key| {
        tab.get(*key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|url| !url.is_empty())
    })?;
    let title = [tab.get("savedTitle"), tab.get("title")]
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .chain(node.title)
        .map(str::trim)
        .find(|title| !title.is_empty())
        .unwrap_or(url);
    Some(Bookmark::new(title, url))
}

/// Folder display title: the node's own title, then `data.title`, then
/// `data.name`, else the default.
fn node_title(node: &SidebarNode<'_>, default: &str) -> String {
    node.title
        .into_iter()
        .chain(node.data_get("title").and_then(Value::as_str))
        .chain(node.data_get("name").and_then(Value::as_str))
        .map(str::trim)
        .find(|title| !title.is_empty())
        .unwrap_or(default)
        .to_string()
}

/// Recursively assemble the subtree rooted at `id`.
///
/// `visiting` holds the ids on the current root-to-leaf path; re-entering
/// one means a parent cycle, which terminates that branch. A tab node is
/// always a leaf, even when it also carries folder-like payload keys. A
/// node that is neither a tab nor folder-like and has no children is noise
/// and yields nothing.
fn build_tree<'a>(
    table: &NodeTable<'a>,
    id: &'a str,
    visiting: &mut HashSet<&'a str>,
) -> Option<BookmarkNode> {
    if visiting.contains(id) {
        log::debug!("parent cycle at node {id}, cutting branch");
        return None;
    }
    let node = *table.get(id)?;
    visiting.insert(id);

    if let Some(bookmark) = tab_info(&node) {
        visiting.remove(id);
        return Some(bookmark.into());
    }

    let child_ids = table.children_of(id);
    if !is_folder_like(&node) && child_ids.is_empty() {
        visiting.remove(id);
        return None;
    }

    let mut folder = Folder::new(node_title(&node, "Untitled Folder"));
    let mut seen_tabs: HashSet<(String, String)> = HashSet::new();
    for child_id in child_ids {
        let Some(child) = build_tree(table, child_id, visiting) else {
            continue;
        };
        if let BookmarkNode::Bookmark(ref bookmark) = child {
            let (title, url) = bookmark.dedup_key();
            if !seen_tabs.insert((title.to_string(), url.to_string())) {
                continue;
            }
        }
        folder.children.push(child);
    }
    visiting.remove(id);
    Some(folder.into())
}

/// Expand each root id into a subtree, deduplicating sibling bookmarks by
/// `(title, url)` exactly as a folder's direct children are.
fn build_children_from_ids<'a>(
    table: &NodeTable<'a>,
    ids: impl IntoIterator<Item = &'a str>,
) -> Vec<BookmarkNode> {
    let mut children = Vec::new();
    let mut seen_tabs: HashSet<(String, String)> = HashSet::new();
    for id in ids {
        let Some(child) = build_tree(table, id, &mut HashSet::new()) else {
            continue;
        };
        if let BookmarkNode::Bookmark(ref bookmark) = child {
            let (title, url) = bookmark.dedup_key();
            if !seen_tabs.insert((title.to_string(), url.to_string())) {
                continue;
            }
        }
        children.push(child);
    }
    children
}

/// Pin status of a space, checked on the space object first and its nested
/// `data` second. `None` means the schema carries no usable flag and the
/// space is always included.
fn space_is_pinned(space: &Value) -> Option<bool> {
    for scope in [Some(space), space.get("data")].into_iter().flatten() {
        for key in PIN_KEYS {
            if let Some(pinned) = scope.get(key).and_then(Value::as_bool) {
                return Some(pinned);
            }
        }
    }
    None
}

fn space_title(space: &Value, index: usize) -> String {
    ["title", "name"]
        .iter()
        .find_map(|key| space.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Space {}", index + 1))
}

fn root_id_key_matches(key: &str) -> bool {
    let lower = key.to_lowercase();
    lower.contains("itemcontainer")
        || matches!(lower.as_str(), "rootid" | "rootids" | "rootitemid" | "rootitemids")
}

/// Recursive scan of a space subtree for root-id-bearing keys, collecting
/// string values and strings inside list values.
fn gather_root_ids<'a>(value: &'a Value, ids: &mut HashSet<&'a str>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                if root_id_key_matches(key) {
                    match child {
                        Value::String(id) => {
                            ids.insert(id.as_str());
                        }
                        Value::Array(list) => {
                            ids.extend(list.iter().filter_map(Value::as_str));
                        }
                        _ => {}
                    }
                }
                gather_root_ids(child, ids);
            }
        }
        Value::Array(list) => {
            for child in list {
                gather_root_ids(child, ids);
            }
        }
        _ => {}
    }
}

/// Resolve the root ids of one space: direct key variants on the space and
/// its `data`, plus the recursive subtree scan. Candidates are filtered to
/// ids present in the table and sorted back into document order.
fn space_root_ids<'a>(space: &'a Value, table: &NodeTable<'a>) -> Vec<&'a str> {
    let mut candidates: HashSet<&'a str> = HashSet::new();
    for scope in [Some(space), space.get("data")].into_iter().flatten() {
        for key in SPACE_ROOT_KEYS {
            match scope.get(key) {
                Some(Value::String(id)) => {
                    candidates.insert(id.as_str());
                }
                Some(Value::Array(list)) => {
                    candidates.extend(list.iter().filter_map(Value::as_str));
                }
                _ => {}
            }
        }
    }
    gather_root_ids(space, &mut candidates);

    let mut roots: Vec<&'a str> = candidates
        .into_iter()
        .filter(|id| table.contains(id))
        .collect();
    roots.sort_by_key(|id| table.order_of(id).unwrap_or(usize::MAX));
    roots
}

/// Synthetic wrapper title for a container's export.
pub(crate) fn container_folder_title(container_index: usize) -> String {
    format!("Arc Export (Container {})", container_index + 1)
}

/// Reconstruct the bookmark forest for one container.
///
/// Returns the forest plus the number of spaces detected and included. When
/// at least one space produces output, the forest is the space folders
/// followed by the expansion of any root ids no included space claimed.
/// When no space produces anything, every root id is expanded directly and
/// wrapped in one synthetic container folder.
pub(crate) fn parse_container(
    container: &Value,
    container_index: usize,
    options: &ExportOptions,
) -> (Vec<BookmarkNode>, usize, usize) {
    let table = NodeTable::build(container);
    let root_ids = table.root_ids();

    let spaces = super::locate::find_list_for_key(container, "spaces");
    let spaces_detected = spaces.map_or(0, Vec::len);
    let mut spaces_included = 0;

    let fallback = |table: &NodeTable<'_>| -> Vec<BookmarkNode> {
        let root_children = build_children_from_ids(table, root_ids.iter().copied());
        if root_children.is_empty() {
            Vec::new()
        } else {
            vec![Folder::with_children(container_folder_title(container_index), root_children)
                .into()]
        }
    };

    let Some(spaces) = spaces.filter(|spaces| !spaces.is_empty()) else {
        return (fallback(&table), spaces_detected, spaces_included);
    };

    let mut used_ids: HashSet<&str> = HashSet::new();
    let mut space_nodes: Vec<BookmarkNode> = Vec::new();
    for (index, space) in spaces.iter().enumerate() {
        if !space.is_object() {
            continue;
        }
        if space_is_pinned(space) == Some(false) && !options.include_unpinned {
            log::debug!("skipping unpinned space at index {index}");
            continue;
        }
        let roots = space_root_ids(space, &table);
        if roots.is_empty() {
            continue;
        }
        let children = build_children_from_ids(&table, roots.iter().copied());
        if children.is_empty() {
            continue;
        }
        used_ids.extend(roots.iter().copied());
        space_nodes.push(Folder::with_children(space_title(space, index), children).into());
        spaces_included += 1;
    }

    let top_nodes = if space_nodes.is_empty() {
        fallback(&table)
    } else {
        let remaining = root_ids
            .iter()
            .copied()
            .filter(|id| !used_ids.contains(id));
        let mut nodes = space_nodes;
        nodes.extend(build_children_from_ids(&table, remaining));
        nodes
    };

    (top_nodes, spaces_detected, spaces_included)
}
