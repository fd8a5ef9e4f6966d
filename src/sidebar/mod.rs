//! Sidebar parsing: from a raw JSON document to a bookmark forest.
//!
//! The sidebar format is an undocumented third-party internal structure
//! that changes between versions, so everything in this module is
//! heuristic. The submodules split the work the way the data flows:
//! [`locate`] finds containers and their lists, [`table`] turns a flat
//! items list into an addressable node table, and [`tree`] reconstructs
//! the folder/bookmark forest from it.

pub(crate) mod locate;
mod options;
mod table;
mod tree;

pub use options::ExportOptions;

use serde_json::Value;

use crate::model::{count_nodes, BookmarkNode, ExportStats, Folder};

/// Parse a sidebar document into a bookmark forest with export statistics.
///
/// This never fails: a document with nothing recognizable produces an
/// empty forest and zeroed counters. Callers that need "nothing found" to
/// be fatal check the result at the boundary.
pub fn parse_sidebar(doc: &Value, options: &ExportOptions) -> (Vec<BookmarkNode>, ExportStats) {
    let containers = locate::extract_containers(doc);
    let selected = locate::select_containers(containers, options.all_containers);
    log::debug!(
        "found {} containers, selected {}",
        containers.len(),
        selected.len()
    );

    let mut forest: Vec<BookmarkNode> = Vec::new();
    let mut spaces_detected = 0;
    let mut spaces_included = 0;

    for &(container_index, container) in &selected {
        if !container.is_object() {
            continue;
        }
        let (container_nodes, detected, included) =
            tree::parse_container(container, container_index, options);
        spaces_detected += detected;
        spaces_included += included;
        if container_nodes.is_empty() {
            continue;
        }
        if options.all_containers && selected.len() > 1 {
            // Each container gets its own wrapper so their forests stay
            // apart; a lone container is emitted unwrapped to avoid a
            // pointless extra level.
            forest.push(
                Folder::with_children(
                    tree::container_folder_title(container_index),
                    container_nodes,
                )
                .into(),
            );
        } else {
            forest.extend(container_nodes);
        }
    }

    let (folders, tabs) = count_nodes(&forest);
    let stats = ExportStats {
        containers_total: containers.len(),
        containers_selected: selected.len(),
        spaces_detected,
        spaces_included,
        folders,
        tabs,
    };
    (forest, stats)
}
