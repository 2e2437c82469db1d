use super::Config;

pub const DEFAULT_JEST_PATH: &str = "node_modules/.bin/jest";
pub const DEFAULT_JEST_DEBUG_PATH_WINDOWS: &str = "node_modules/jest/bin/jest.js";

pub const TERMINAL_NAME: &str = "JestRunIt";
pub const SETTINGS_SECTION: &str = "jestRunIt";

pub const DEFAULT_RUN_TEST_LABEL: &str = "🏃‍♂️";
pub const DEFAULT_DEBUG_TEST_LABEL: &str = "🐞";
pub const DEFAULT_UPDATE_SNAPSHOTS_LABEL: &str = "👍";

pub const DEFAULT_TEST_FILE_PATTERNS: [&str; 2] = [
    "**/*.{test,spec}.{js,jsx,ts,tsx}",
    "**/__tests__/*.{js,jsx,ts,tsx}",
];

pub fn default_config() -> Config {
    Config {
        test_match_patterns: Some(default_test_file_patterns()),
        ..Config::default()
    }
}

pub fn default_test_file_patterns() -> Vec<String> {
    DEFAULT_TEST_FILE_PATTERNS
        .iter()
        .map(|p| p.to_string())
        .collect()
}

pub fn get_default_config_dir() -> std::path::PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "jest-run-it") {
        proj_dirs.config_dir().to_path_buf()
    } else if let Some(base_dirs) = directories::BaseDirs::new() {
        base_dirs.home_dir().join(".config").join("jest-run-it")
    } else {
        std::path::PathBuf::from(".").join(".config").join("jest-run-it")
    }
}

pub fn get_config_file_path() -> std::path::PathBuf {
    // Allow environment variable override for config path (used in tests)
    if let Ok(config_path) = std::env::var("JEST_RUN_IT_CONFIG_PATH") {
        return std::path::PathBuf::from(config_path);
    }

    get_default_config_dir().join("config.json")
}
