use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JestRunItError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid arguments: {message}")]
    InvalidArgs { message: String },

    #[error("Discovery failed for {file}: {reason}")]
    Discovery { file: String, reason: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid test match pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, JestRunItError>;

impl JestRunItError {
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs {
            message: message.into(),
        }
    }

    pub fn discovery_error(file: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Discovery {
            file: file.into(),
            reason: reason.into(),
        }
    }

    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}

impl From<PathBuf> for JestRunItError {
    fn from(path: PathBuf) -> Self {
        Self::FileNotFound {
            path: path.to_string_lossy().to_string(),
        }
    }
}

impl From<crate::config::ConfigError> for JestRunItError {
    fn from(error: crate::config::ConfigError) -> Self {
        Self::Config {
            message: error.to_string(),
        }
    }
}
