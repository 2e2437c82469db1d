use glob::{MatchOptions, Pattern};
use tracing::debug;

use crate::config::Config;
use crate::utils::{JestRunItError, Result};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Decides whether a path is a test file, so run/debug affordances are only
/// offered where they make sense.
#[derive(Debug, Clone)]
pub struct TestFileMatcher {
    patterns: Vec<Pattern>,
}

impl TestFileMatcher {
    /// Compile glob patterns. `{a,b}` alternatives are expanded up front since
    /// `glob` has no brace syntax of its own.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut compiled = Vec::new();
        for pattern in patterns {
            for expanded in expand_braces(pattern) {
                let glob = Pattern::new(&expanded)
                    .map_err(|e| JestRunItError::invalid_pattern(pattern.as_str(), e.msg))?;
                compiled.push(glob);
            }
        }
        Ok(Self { patterns: compiled })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.get_test_match_patterns())
    }

    /// Dot directories never match, but a leading `./` is ignored.
    pub fn is_match(&self, path: &str) -> bool {
        let normalized = path.replace('\\', "/");
        let relative = normalized.trim_start_matches("./");
        let matched = self
            .patterns
            .iter()
            .any(|p| p.matches_with(relative, MATCH_OPTIONS));
        debug!(path = %normalized, matched, "checked test file patterns");
        matched
    }
}

fn expand_braces(pattern: &str) -> Vec<String> {
    let Some(open) = pattern.find('{') else {
        return vec![pattern.to_string()];
    };

    let mut depth = 0usize;
    let mut close = None;
    for (offset, c) in pattern[open..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(open + offset);
                    break;
                }
            }
            _ => {}
        }
    }
    // unbalanced: leave it to glob, which treats braces literally
    let Some(close) = close else {
        return vec![pattern.to_string()];
    };

    let prefix = &pattern[..open];
    let suffix = &pattern[close + 1..];
    split_alternatives(&pattern[open + 1..close])
        .into_iter()
        .flat_map(|alt| expand_braces(&format!("{prefix}{alt}{suffix}")))
        .collect()
}

fn split_alternatives(body: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in body.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&body[start..]);
    parts
}
