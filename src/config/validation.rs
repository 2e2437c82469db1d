use super::{Config, ConfigError, Result};
use crate::core::matcher::TestFileMatcher;

pub fn validate_config(config: &Config) -> Result<()> {
    validate_cli_options(&config.jest_cli_options)?;
    validate_snapshot_matchers(&config.custom_snapshot_matchers)?;
    validate_test_match_patterns(config)?;
    Ok(())
}

pub fn validate_cli_options(options: &[String]) -> Result<()> {
    if options.iter().any(|option| option.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "jestCLIOptions cannot contain empty entries".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_snapshot_matchers(matchers: &[String]) -> Result<()> {
    for matcher in matchers {
        if !is_valid_matcher_name(matcher) {
            return Err(ConfigError::Validation(format!(
                "Invalid snapshot matcher name '{}'. Must be a JavaScript identifier",
                matcher
            )));
        }
    }
    Ok(())
}

pub fn validate_test_match_patterns(config: &Config) -> Result<()> {
    TestFileMatcher::from_config(config)
        .map(|_| ())
        .map_err(|e| ConfigError::Validation(e.to_string()))
}

fn is_valid_matcher_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
