//! Flat item list to addressable node table.

use std::collections::HashMap;

use serde_json::{Map, Value};

use super::locate::find_list_for_key;

/// One sidebar item, borrowed from the raw document.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarNode<'a> {
    /// Item id, nonempty
    pub id: &'a str,

    /// Resolved parent id; `None` when absent, empty, or whitespace
    pub parent_id: Option<&'a str>,

    /// The item's own title field, when it is literally a string
    pub title: Option<&'a str>,

    /// Freeform payload object
    pub data: Option<&'a Map<String, Value>>,

    /// Zero-based position in the original items list. This is the only
    /// sibling-ordering signal and the tiebreak for space root ordering.
    pub order: usize,
}

impl<'a> SidebarNode<'a> {
    /// Look up a key in the payload object.
    pub fn data_get(&self, key: &str) -> Option<&'a Value> {
        self.data.and_then(|data| data.get(key))
    }
}

/// Id-keyed node table with a derived child-adjacency index.
///
/// Built once per container and read-only afterwards. Duplicate ids resolve
/// last-wins, the later item replacing the earlier one wholesale.
#[derive(Debug, Default)]
pub(crate) struct NodeTable<'a> {
    nodes: HashMap<&'a str, SidebarNode<'a>>,
    children: HashMap<&'a str, Vec<&'a str>>,
}

const PARENT_KEYS: [&str; 3] = ["parentID", "parentId", "parent_id"];

impl<'a> NodeTable<'a> {
    /// Build the table for one container.
    ///
    /// Locates the container's `items` list and keeps every entry that is an
    /// object with a nonempty string `id`; everything else is dropped
    /// silently. A child is indexed under its parent only when the parent id
    /// exists in the table, so dangling parent references promote the node
    /// to a root.
    pub fn build(container: &'a Value) -> Self {
        let items: &[Value] = match find_list_for_key(container, "items") {
            Some(items) => items,
            None => &[],
        };

        let mut nodes: HashMap<&'a str, SidebarNode<'a>> = HashMap::new();
        for (order, item) in items.iter().enumerate() {
            let Some(map) = item.as_object() else {
                continue;
            };
            let Some(id) = map.get("id").and_then(Value::as_str).filter(|id| !id.is_empty())
            else {
                continue;
            };

            let parent_id = PARENT_KEYS
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_str))
                .filter(|parent| !parent.trim().is_empty());
            let title = map.get("title").and_then(Value::as_str);
            let data = map.get("data").and_then(Value::as_object);

            nodes.insert(
                id,
                SidebarNode {
                    id,
                    parent_id,
                    title,
                    data,
                    order,
                },
            );
        }

        let mut children: HashMap<&'a str, Vec<&'a str>> = HashMap::new();
        for node in Self::in_document_order(&nodes) {
            if let Some(parent) = node.parent_id {
                if nodes.contains_key(parent) {
                    children.entry(parent).or_default().push(node.id);
                }
            }
        }

        Self { nodes, children }
    }

    /// Nodes sorted by their original list position.
    fn in_document_order(nodes: &HashMap<&'a str, SidebarNode<'a>>) -> Vec<SidebarNode<'a>> {
        let mut ordered: Vec<SidebarNode<'a>> = nodes.values().copied().collect();
        ordered.sort_by_key(|node| node.order);
        ordered
    }

    pub fn get(&self, id: &str) -> Option<&SidebarNode<'a>> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn children_of(&self, id: &str) -> &[&'a str] {
        self.children.get(id).map_or(&[], Vec::as_slice)
    }

    /// Ids with no parent (or a parent missing from the table), in document
    /// order.
    pub fn root_ids(&self) -> Vec<&'a str> {
        Self::in_document_order(&self.nodes)
            .into_iter()
            .filter(|node| {
                node.parent_id
                    .map_or(true, |parent| !self.nodes.contains_key(parent))
            })
            .map(|node| node.id)
            .collect()
    }

    /// Positional order of a known id, used for space root sorting.
    pub fn order_of(&self, id: &str) -> Option<usize> {
        self.nodes.get(id).map(|node| node.order)
    }
}
