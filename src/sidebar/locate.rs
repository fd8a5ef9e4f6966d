//! Structural location of containers, items, and spaces.
//!
//! The sidebar document is an undocumented, versioned format that nests its
//! interesting lists at varying depths. Nothing here assumes a fixed schema:
//! every lookup is a best-effort search that returns `None` on a miss.

use serde_json::Value;

/// Depth-first search for the first array stored under `key` anywhere in
/// `value`.
///
/// For an object, direct membership is checked before descending into the
/// values in document order; arrays are descended in index order. The first
/// match wins, so the search is deterministic for a given document.
pub(crate) fn find_list_for_key<'a>(value: &'a Value, key: &str) -> Option<&'a Vec<Value>> {
    match value {
        Value::Object(map) => {
            if let Some(Value::Array(list)) = map.get(key) {
                return Some(list);
            }
            map.values().find_map(|child| find_list_for_key(child, key))
        }
        Value::Array(list) => list.iter().find_map(|child| find_list_for_key(child, key)),
        _ => None,
    }
}

/// Locate the containers list in a sidebar document.
///
/// Prefers the canonical `root.sidebar.containers` path, then falls back to
/// searching the whole structure for any `containers` array. Absence is a
/// valid outcome and yields an empty slice.
pub(crate) fn extract_containers(doc: &Value) -> &[Value] {
    let root = doc.get("root").unwrap_or(doc);

    if let Some(Value::Array(containers)) = root
        .get("sidebar")
        .filter(|sidebar| sidebar.is_object())
        .and_then(|sidebar| sidebar.get("containers"))
    {
        return containers;
    }

    match find_list_for_key(root, "containers") {
        Some(containers) => containers,
        None => {
            log::debug!("no containers list found anywhere in the document");
            &[]
        }
    }
}

/// Pick which containers to export, paired with their document indices.
///
/// Without `all_containers`, container index 1 is preferred when it carries
/// items: index 0 is typically a default/incognito container in real
/// profiles. Otherwise the first container with a nonempty items list wins,
/// then container 0 as a last resort.
pub(crate) fn select_containers(containers: &[Value], all_containers: bool) -> Vec<(usize, &Value)> {
    if containers.is_empty() {
        return Vec::new();
    }
    if all_containers {
        return containers.iter().enumerate().collect();
    }
    if containers.len() > 1 && containers[1].is_object() && has_items(&containers[1]) {
        return vec![(1, &containers[1])];
    }
    for (index, container) in containers.iter().enumerate() {
        if has_items(container) {
            return vec![(index, container)];
        }
    }
    vec![(0, &containers[0])]
}

fn has_items(container: &Value) -> bool {
    find_list_for_key(container, "items").is_some_and(|items| !items.is_empty())
}
