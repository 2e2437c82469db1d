use super::defaults::{default_config, get_config_file_path, SETTINGS_SECTION};
use super::{Config, ConfigError, Result};
use serde_json::{Map, Value};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ConfigManager;

impl ConfigManager {
    pub fn get_config_path() -> Result<String> {
        let config_path = get_config_file_path();
        Ok(config_path.to_string_lossy().to_string())
    }

    /// Resolve the effective configuration for a workspace: an explicit file,
    /// then `.vscode/settings.json`, then the user config file, then defaults.
    pub fn load_for_workspace(explicit: Option<&Path>, workspace: &Path) -> Result<Config> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading explicit config file");
            return Self::load_from_file(path);
        }

        let settings_path = workspace.join(".vscode").join("settings.json");
        if settings_path.exists() {
            if let Some(config) = Self::load_from_vscode_settings(&settings_path)? {
                debug!(path = %settings_path.display(), "using workspace settings");
                return Ok(config);
            }
        }

        Self::load_or_default_with_path(None)
    }

    pub fn load_or_default_with_path(config_path: Option<&Path>) -> Result<Config> {
        let config_path = match config_path {
            Some(path) => path.to_path_buf(),
            None => get_config_file_path(),
        };

        if config_path.exists() {
            debug!(path = %config_path.display(), "loading user config file");
            Self::load_from_file(&config_path)
        } else {
            Ok(default_config())
        }
    }

    /// Load a config file holding the settings keys at top level or wrapped
    /// in a `jestRunIt` object.
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&content)?;
        let section = extract_section(&value).unwrap_or(value);
        Self::from_value(section)
    }

    /// Load the `jestRunIt` section of a VS Code settings file. Returns
    /// `Ok(None)` when the file carries no such section.
    pub fn load_from_vscode_settings(path: &Path) -> Result<Option<Config>> {
        let content = fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&content)?;
        match extract_section(&value) {
            Some(section) => Self::from_value(section).map(Some),
            None => Ok(None),
        }
    }

    fn from_value(value: Value) -> Result<Config> {
        let config: Config = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the defaults to the user config file. Refuses to replace an
    /// existing file unless `force` is set.
    pub fn init(force: bool) -> Result<PathBuf> {
        let path = get_config_file_path();
        Self::init_at(&path, force)?;
        Ok(path)
    }

    pub fn init_at(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            return Err(ConfigError::Validation(format!(
                "Config file already exists at {}. Use --force to overwrite",
                path.display()
            )));
        }
        Self::save_to_path(&default_config(), path)
    }

    pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
        config.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(config)?;
        let mut file = fs::File::create(path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        Ok(())
    }
}

/// Pull the settings section out of a JSON document, either as a nested
/// `"jestRunIt": {...}` object or as dotted `"jestRunIt.key"` entries.
fn extract_section(value: &Value) -> Option<Value> {
    let object = value.as_object()?;

    if let Some(section @ Value::Object(_)) = object.get(SETTINGS_SECTION) {
        return Some(section.clone());
    }

    let prefix = format!("{SETTINGS_SECTION}.");
    let dotted: Map<String, Value> = object
        .iter()
        .filter_map(|(key, v)| {
            key.strip_prefix(prefix.as_str())
                .map(|short| (short.to_string(), v.clone()))
        })
        .collect();

    if dotted.is_empty() {
        None
    } else {
        Some(Value::Object(dotted))
    }
}
