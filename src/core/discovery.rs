//! Shape of the parsed test tree and snapshot metadata.
//!
//! Parsing JavaScript is left to an external parser. This module defines what
//! the rest of the crate needs from it and a JSON adapter for trees that were
//! parsed elsewhere and written to disk.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use crate::utils::{JestRunItError, Result};

/// 1-based source position, as reported by the parser.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then(self.column.cmp(&other.column))
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    It,
    Describe,
    Root,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TestNode {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub file: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub children: Vec<TestNode>,
    #[serde(default)]
    pub start: Location,
    #[serde(default)]
    pub end: Location,
}

impl TestNode {
    pub fn is_testable(&self) -> bool {
        matches!(self.kind, NodeKind::It | NodeKind::Describe)
    }

    /// True when `range` lies entirely inside this node.
    pub fn contains(&self, start: Location, end: Location) -> bool {
        start >= self.start && end <= self.end
    }
}

/// Source range of one snapshot matcher call.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotMetadata {
    pub start: Location,
    pub end: Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryResult {
    Parsed(TestNode),
    Failed { reason: String },
}

impl DiscoveryResult {
    /// Top-level children of the parsed root, or nothing when parsing failed.
    pub fn into_children(self) -> Vec<TestNode> {
        match self {
            DiscoveryResult::Parsed(root) => root.children,
            DiscoveryResult::Failed { .. } => Vec::new(),
        }
    }
}

/// Turns a test source file into a tree of describe/it nodes.
pub trait Discovery {
    fn parse(&self, file: &Path) -> DiscoveryResult;
}

/// Reads a root [`TestNode`] that was serialized to JSON by an external
/// parser.
pub struct JsonDiscovery;

impl Discovery for JsonDiscovery {
    fn parse(&self, file: &Path) -> DiscoveryResult {
        let parsed = fs::read_to_string(file)
            .map_err(|e| e.to_string())
            .and_then(|content| {
                serde_json::from_str::<TestNode>(&content).map_err(|e| e.to_string())
            });

        match parsed {
            Ok(root) => DiscoveryResult::Parsed(root),
            Err(reason) => DiscoveryResult::Failed { reason },
        }
    }
}

/// Read snapshot matcher locations written by the external parser.
pub fn load_snapshot_metadata(path: &Path) -> Result<Vec<SnapshotMetadata>> {
    if !path.exists() {
        return Err(JestRunItError::file_not_found(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| JestRunItError::discovery_error(path.display().to_string(), e.to_string()))
}


#[cfg(test)]
mod tests {
    use super::fixtures::sample_root;
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_location_ordering() {
        assert!(Location::new(2, 1) > Location::new(1, 99));
        assert!(Location::new(2, 5) > Location::new(2, 4));
        let same = Location::new(3, 3).cmp(&Location::new(3, 3));
        assert_eq!(same, Ordering::Equal);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let root = sample_root();
        let math = &root.children[0];
        assert!(math.contains(Location::new(1, 1), Location::new(11, 3)));
        assert!(math.contains(Location::new(3, 5), Location::new(3, 30)));
        assert!(!math.contains(Location::new(1, 0), Location::new(3, 1)));
        assert!(!math.contains(Location::new(11, 1), Location::new(11, 4)));
    }

    #[test]
    fn test_deserialize_parser_output() {
        let json = r#"{
            "type": "root",
            "children": [{
                "name": "adds",
                "file": "/p/sum.test.ts",
                "type": "it",
                "start": {"line": 3, "column": 1},
                "end": {"line": 5, "column": 3}
            }]
        }"#;
        let root: TestNode = serde_json::from_str(json).unwrap();
        assert_eq!(root.kind, NodeKind::Root);
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].kind, NodeKind::It);
        assert!(root.children[0].is_testable());
        assert!(!root.is_testable());
        assert!(root.children[0].children.is_empty());
    }

    #[test]
    fn test_json_discovery_reads_tree() {
        let temp_dir = TempDir::new().unwrap();
        let tree_path = temp_dir.path().join("tree.json");
        fs::write(&tree_path, serde_json::to_string(&sample_root()).unwrap()).unwrap();

        match JsonDiscovery.parse(&tree_path) {
            DiscoveryResult::Parsed(root) => assert_eq!(root, sample_root()),
            DiscoveryResult::Failed { reason } => panic!("unexpected failure: {reason}"),
        }
    }

    #[test]
    fn test_json_discovery_failure_is_typed() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.json");
        let result = JsonDiscovery.parse(&missing);
        assert!(matches!(result, DiscoveryResult::Failed { .. }));
        assert!(result.into_children().is_empty());

        let garbage = temp_dir.path().join("garbage.json");
        fs::write(&garbage, "describe('x', () => {})").unwrap();
        assert!(matches!(
            JsonDiscovery.parse(&garbage),
            DiscoveryResult::Failed { .. }
        ));
    }

    #[test]
    fn test_load_snapshot_metadata() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snapshots.json");
        fs::write(
            &path,
            r#"[{"start": {"line": 8, "column": 7}, "end": {"line": 8, "column": 40}}]"#,
        )
        .unwrap();

        let metadata = load_snapshot_metadata(&path).unwrap();
        assert_eq!(metadata.len(), 1);
        assert_eq!(metadata[0].start, Location::new(8, 7));

        assert!(matches!(
            load_snapshot_metadata(&temp_dir.path().join("none.json")),
            Err(JestRunItError::FileNotFound { .. })
        ));

        fs::write(&path, "{}").unwrap();
        assert!(matches!(
            load_snapshot_metadata(&path),
            Err(JestRunItError::Discovery { .. })
        ));
    }
}
