use jest_run_it::core::discovery::{load_snapshot_metadata, JsonDiscovery};
use jest_run_it::core::explorer::{items_for_file, Collapsible};
use jest_run_it::core::lens::{provide_lenses, LensAction};
use jest_run_it::core::matcher::TestFileMatcher;
use jest_run_it::{
    build_debug_launch, build_run_command, parse_environment_string, Config, Platform, RunRequest,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const TREE: &str = r#"{
    "type": "root",
    "file": "/p/sum.test.ts",
    "children": [
        {
            "type": "describe",
            "name": "math",
            "file": "/p/sum.test.ts",
            "start": {"line": 1, "column": 1},
            "end": {"line": 6, "column": 3},
            "children": [
                {
                    "type": "it",
                    "name": "adds (1 + 2)",
                    "file": "/p/sum.test.ts",
                    "start": {"line": 2, "column": 3},
                    "end": {"line": 4, "column": 5}
                }
            ]
        }
    ]
}"#;

const SNAPSHOTS: &str = r#"[
    {"start": {"line": 3, "column": 5}, "end": {"line": 3, "column": 30}}
]"#;

fn write_fixtures(dir: &TempDir) -> (PathBuf, PathBuf) {
    let tree = dir.path().join("tree.json");
    let snapshots = dir.path().join("snapshots.json");
    fs::write(&tree, TREE).unwrap();
    fs::write(&snapshots, SNAPSHOTS).unwrap();
    (tree, snapshots)
}

#[test]
fn test_lens_click_builds_expected_terminal_command() {
    let dir = TempDir::new().unwrap();
    let (tree, snapshots) = write_fixtures(&dir);
    let config = Config::default();

    let snapshots = load_snapshot_metadata(&snapshots).unwrap();
    let lenses = provide_lenses(&JsonDiscovery, &tree, &snapshots, &config, false);

    let actions: Vec<(LensAction, &str)> = lenses
        .iter()
        .map(|l| (l.action, l.test_name.as_str()))
        .collect();
    assert_eq!(
        actions,
        vec![
            (LensAction::Run, "math"),
            (LensAction::Debug, "math"),
            (LensAction::UpdateSnapshots, "math"),
            (LensAction::Run, "math adds (1 + 2)"),
            (LensAction::Debug, "math adds (1 + 2)"),
            (LensAction::UpdateSnapshots, "math adds (1 + 2)"),
        ]
    );
    assert_eq!((lenses[3].line, lenses[3].column), (1, 2));

    let update = &lenses[5];
    let command = build_run_command(&update.to_run_request(), &config, Platform::Linux);
    assert_eq!(
        command.as_str(),
        r"node_modules/.bin/jest '/p/sum.test.ts' -t 'math adds \(1 \+ 2\)' -u"
    );
}

#[test]
fn test_run_and_debug_agree_on_test_selection() {
    let config = Config {
        jest_config_path: Some("jest.unit.js".to_string()),
        jest_cli_options: vec!["--silent".to_string()],
        environment_variables: Some(r#"NODE_ENV=test MSG="a b""#.to_string()),
        ..Config::default()
    };
    let request = RunRequest::new("/p/sum.test.ts")
        .with_test_name("adds (1 + 2)");

    let command = build_run_command(&request, &config, Platform::Windows);
    assert_eq!(
        command.as_str(),
        r#"NODE_ENV=test MSG="a b" node_modules/.bin/jest "/p/sum.test.ts" -t "adds \(1 \+ 2\)" -c jest.unit.js --silent"#
    );

    let launch = build_debug_launch(&request, &config, Platform::Windows);
    assert_eq!(
        launch.args,
        vec![
            "/p/sum.test.ts",
            "-t",
            r"adds \(1 \+ 2\)",
            "-c",
            "jest.unit.js",
            "--silent",
            "--runInBand",
        ]
    );
    let expected_env = parse_environment_string(r#"NODE_ENV=test MSG="a b""#);
    assert_eq!(launch.env, expected_env);
    assert_eq!(launch.env.get("MSG").map(String::as_str), Some("a b"));

    let json = serde_json::to_value(launch.to_launch_configuration()).unwrap();
    assert_eq!(json["type"], "node");
    assert_eq!(
        json["program"],
        "${workspaceFolder}/node_modules/jest/bin/jest.js"
    );
}

#[test]
fn test_explorer_tree_from_json() {
    let dir = TempDir::new().unwrap();
    let (tree, _) = write_fixtures(&dir);

    let items = items_for_file(&JsonDiscovery, &tree);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].label, "math");
    assert_eq!(items[0].collapsible, Collapsible::Expanded);
    assert_eq!(items[0].children[0].test_name, "math adds (1 + 2)");
    assert_eq!(items[0].children[0].collapsible, Collapsible::None);
}

#[test]
fn test_unparseable_tree_degrades_to_nothing() {
    let dir = TempDir::new().unwrap();
    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{").unwrap();

    let config = Config::default();
    let lenses = provide_lenses(&JsonDiscovery, &broken, &[], &config, false);
    assert!(lenses.is_empty());
    assert!(items_for_file(&JsonDiscovery, &broken).is_empty());
}

#[test]
fn test_matcher_accepts_default_test_files() {
    let matcher = TestFileMatcher::from_config(&Config::default()).unwrap();
    assert!(matcher.is_match("src/sum.test.ts"));
    assert!(matcher.is_match(r"src\__tests__\sum.js"));
    assert!(!matcher.is_match("src/sum.ts"));
}
