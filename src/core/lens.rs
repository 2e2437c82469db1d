use serde::Serialize;
use std::path::Path;
use tracing::warn;

use crate::config::Config;
use crate::core::command::RunRequest;
use crate::core::discovery::{Discovery, DiscoveryResult, SnapshotMetadata, TestNode};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum LensAction {
    Run,
    Debug,
    UpdateSnapshots,
}

impl LensAction {
    pub fn command_id(self) -> &'static str {
        match self {
            LensAction::Run => "jestRunItCodeLens.runTest",
            LensAction::Debug => "jestRunItCodeLens.debugTest",
            LensAction::UpdateSnapshots => "jestRunItCodeLens.updateSnapshots",
        }
    }

    pub fn tooltip(self) -> &'static str {
        match self {
            LensAction::Run => "Run test",
            LensAction::Debug => "Debug test",
            LensAction::UpdateSnapshots => "Update snapshots",
        }
    }

    pub fn title(self, config: &Config) -> &str {
        match self {
            LensAction::Run => config.get_run_test_label(),
            LensAction::Debug => config.get_debug_test_label(),
            LensAction::UpdateSnapshots => config.get_update_snapshots_label(),
        }
    }
}

/// One clickable action anchored above a describe/it block.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Lens {
    pub action: LensAction,
    pub title: String,
    pub tooltip: String,
    pub command: String,
    pub file: String,
    pub test_name: String,
    /// 0-based
    pub line: u32,
    /// 0-based
    pub column: u32,
}

impl Lens {
    fn new(action: LensAction, node: &TestNode, test_name: &str, config: &Config) -> Self {
        Self {
            action,
            title: action.title(config).to_string(),
            tooltip: action.tooltip().to_string(),
            command: action.command_id().to_string(),
            file: node.file.clone(),
            test_name: test_name.to_string(),
            line: node.start.line.saturating_sub(1),
            column: node.start.column.saturating_sub(1),
        }
    }

    /// The request this lens triggers when clicked.
    pub fn to_run_request(&self) -> RunRequest {
        RunRequest::new(self.file.as_str())
            .with_test_name(self.test_name.as_str())
            .with_update_snapshots(self.action == LensAction::UpdateSnapshots)
    }
}

/// Lenses for every describe/it node under `children`, depth first. Nested
/// nodes carry their full space-joined name so `-t` selects exactly them.
pub fn generate_lenses(
    children: &[TestNode],
    snapshots: &[SnapshotMetadata],
    config: &Config,
) -> Vec<Lens> {
    let mut lenses = Vec::new();
    for child in children {
        collect_lenses(&mut lenses, child, "", snapshots, config);
    }
    lenses
}

fn collect_lenses(
    lenses: &mut Vec<Lens>,
    node: &TestNode,
    prefix: &str,
    snapshots: &[SnapshotMetadata],
    config: &Config,
) {
    if !node.is_testable() {
        return;
    }

    let name = if prefix.is_empty() {
        node.name.clone()
    } else {
        format!("{prefix} {}", node.name)
    };

    lenses.push(Lens::new(LensAction::Run, node, &name, config));
    lenses.push(Lens::new(LensAction::Debug, node, &name, config));
    if has_snapshots(node, snapshots) {
        lenses.push(Lens::new(LensAction::UpdateSnapshots, node, &name, config));
    }

    for child in &node.children {
        collect_lenses(lenses, child, &name, snapshots, config);
    }
}

fn has_snapshots(node: &TestNode, snapshots: &[SnapshotMetadata]) -> bool {
    snapshots.iter().any(|s| node.contains(s.start, s.end))
}

/// Parse `file` and produce its lenses. Unsaved documents get none, and a
/// parse failure degrades to none.
pub fn provide_lenses(
    discovery: &dyn Discovery,
    file: &Path,
    snapshots: &[SnapshotMetadata],
    config: &Config,
    dirty: bool,
) -> Vec<Lens> {
    if dirty {
        return Vec::new();
    }

    let result = discovery.parse(file);
    if let DiscoveryResult::Failed { reason } = &result {
        warn!(file = %file.display(), %reason, "could not parse test file");
    }
    generate_lenses(&result.into_children(), snapshots, config)
}
