use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::quote::QuoteMode;

pub mod defaults;
pub mod manager;
pub mod validation;

pub use manager::ConfigManager;

/// Snapshot of the `jestRunIt` settings section. Every key is optional; an
/// empty string counts as unset, so a blank setting never produces a flag.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jest_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jest_config_path: Option<String>,
    #[serde(rename = "jestCLIOptions")]
    pub jest_cli_options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_variables: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument_quotes_to_use: Option<QuoteMode>,
    pub custom_snapshot_matchers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_test_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_test_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_snapshots_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_match_patterns: Option<Vec<String>>,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }

    pub fn get_jest_path(&self) -> Option<&str> {
        non_blank(&self.jest_path)
    }

    pub fn get_jest_config_path(&self) -> Option<&str> {
        non_blank(&self.jest_config_path)
    }

    pub fn get_environment_variables(&self) -> &str {
        non_blank(&self.environment_variables).unwrap_or("")
    }

    pub fn get_run_test_label(&self) -> &str {
        non_blank(&self.run_test_label).unwrap_or(defaults::DEFAULT_RUN_TEST_LABEL)
    }

    pub fn get_debug_test_label(&self) -> &str {
        non_blank(&self.debug_test_label).unwrap_or(defaults::DEFAULT_DEBUG_TEST_LABEL)
    }

    pub fn get_update_snapshots_label(&self) -> &str {
        non_blank(&self.update_snapshots_label)
            .unwrap_or(defaults::DEFAULT_UPDATE_SNAPSHOTS_LABEL)
    }

    /// Configured patterns, or the defaults when the key is absent. An
    /// explicitly empty list is kept and matches nothing.
    pub fn get_test_match_patterns(&self) -> Vec<String> {
        match &self.test_match_patterns {
            Some(patterns) => patterns.clone(),
            None => defaults::default_test_file_patterns(),
        }
    }
}
