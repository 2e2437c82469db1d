use serde::Serialize;
use std::path::Path;
use tracing::warn;

use crate::core::discovery::{Discovery, DiscoveryResult, NodeKind, TestNode};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Collapsible {
    None,
    Expanded,
}

/// Entry in the tests side panel.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TestItem {
    /// Name handed to `-t`: the labels of every ancestor and this item.
    pub test_name: String,
    pub label: String,
    /// Hover text; the full name, since nested labels are ambiguous.
    pub tooltip: String,
    pub file: String,
    pub collapsible: Collapsible,
    pub children: Vec<TestItem>,
}

impl TestItem {
    fn from_node(node: &TestNode, parent_name: Option<&str>) -> Self {
        let test_name = match parent_name {
            Some(parent) => format!("{parent} {}", node.name),
            None => node.name.clone(),
        };
        let children = node
            .children
            .iter()
            .map(|child| TestItem::from_node(child, Some(&test_name)))
            .collect();

        Self {
            label: node.name.clone(),
            tooltip: test_name.clone(),
            file: node.file.clone(),
            collapsible: if node.kind == NodeKind::It {
                Collapsible::None
            } else {
                Collapsible::Expanded
            },
            test_name,
            children,
        }
    }
}

/// Map the root's children to panel items, recursively.
pub fn build_test_items(children: &[TestNode]) -> Vec<TestItem> {
    children
        .iter()
        .map(|child| TestItem::from_node(child, None))
        .collect()
}

/// Items for the active file; a parse failure shows an empty panel.
pub fn items_for_file(discovery: &dyn Discovery, file: &Path) -> Vec<TestItem> {
    let result = discovery.parse(file);
    if let DiscoveryResult::Failed { reason } = &result {
        warn!(file = %file.display(), %reason, "could not parse test file");
    }
    build_test_items(&result.into_children())
}
