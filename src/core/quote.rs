//! Argument quoting for the shell command and the debug argument list.
//!
//! Jest treats both the positional path and the `-t` value as regular
//! expressions, so test names are regex-escaped before they are quoted.

use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::config::Config;
use crate::platform::Platform;

#[derive(ValueEnum, Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuoteMode {
    None,
    #[default]
    Auto,
    Single,
    Double,
}

impl QuoteMode {
    /// Resolve `Auto` against the platform. Other modes pass through.
    pub fn resolve(self, platform: Platform) -> QuoteMode {
        match self {
            QuoteMode::Auto if platform.is_windows() => QuoteMode::Double,
            QuoteMode::Auto => QuoteMode::Single,
            other => other,
        }
    }
}

const METACHARACTER_CLASS: &str = r"[.*+?^${}()|\[\]\\]";

fn regex_metacharacters() -> &'static Regex {
    static METACHARACTERS: OnceLock<Regex> = OnceLock::new();
    METACHARACTERS.get_or_init(|| Regex::new(METACHARACTER_CLASS).expect("valid regex"))
}

/// Backslash-escape every regex metacharacter so Jest matches `value`
/// literally. Not idempotent: escaping twice escapes the backslashes too.
pub fn escape_regex(value: &str) -> String {
    regex_metacharacters()
        .replace_all(value, r"\$0")
        .into_owned()
}

/// Quote a single argument. An explicit `mode` wins over the configured
/// `argumentQuotesToUse`, which wins over `Auto`.
///
/// `QuoteMode::None` returns the value untouched; whoever picks it accepts
/// that the shell will interpret it. Already-quoted input is quoted again.
pub fn quote_argument(
    value: &str,
    mode: Option<QuoteMode>,
    config: &Config,
    platform: Platform,
) -> String {
    let mode = mode
        .or(config.argument_quotes_to_use)
        .unwrap_or_default()
        .resolve(platform);

    match mode {
        QuoteMode::Double => format!("\"{}\"", value.replace('"', "\\\"")),
        QuoteMode::Single => format!("'{}'", value.replace('\'', "\\'")),
        QuoteMode::None | QuoteMode::Auto => value.to_string(),
    }
}

/// Regex-escape a test name, then quote it like [`quote_argument`]. An empty
/// name still produces an (empty) quoted argument.
pub fn quote_test_name(
    name: &str,
    mode: Option<QuoteMode>,
    config: &Config,
    platform: Platform,
) -> String {
    quote_argument(&escape_regex(name), mode, config, platform)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_mode(mode: Option<QuoteMode>) -> Config {
        Config {
            argument_quotes_to_use: mode,
            ..Config::default()
        }
    }

    fn unescape_regex(value: &str) -> String {
        let mut out = String::with_capacity(value.len());
        let mut chars = value.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_double_quotes_escape_embedded_double_quote() {
        let config = Config::default();
        let quoted = quote_argument("a\"b", Some(QuoteMode::Double), &config, Platform::Linux);
        assert_eq!(quoted, "\"a\\\"b\"");
    }

    #[test]
    fn test_single_quotes_escape_embedded_single_quote() {
        let config = Config::default();
        let quoted = quote_argument("it's", Some(QuoteMode::Single), &config, Platform::Windows);
        assert_eq!(quoted, "'it\\'s'");
    }

    #[test]
    fn test_single_mode_leaves_double_quotes_alone() {
        let config = Config::default();
        let quoted = quote_argument(
            "say \"hi\"",
            Some(QuoteMode::Single),
            &config,
            Platform::Linux,
        );
        assert_eq!(quoted, "'say \"hi\"'");
    }

    #[test]
    fn test_none_mode_returns_input_unchanged() {
        let config = Config::default();
        let value = "rm -rf $HOME; echo 'x'";
        assert_eq!(
            quote_argument(value, Some(QuoteMode::None), &config, Platform::Linux),
            value
        );
    }

    #[test]
    fn test_auto_mode_resolves_per_platform() {
        let config = Config::default();
        assert_eq!(
            quote_argument("x", Some(QuoteMode::Auto), &config, Platform::Windows),
            "\"x\""
        );
        assert_eq!(
            quote_argument("x", Some(QuoteMode::Auto), &config, Platform::Linux),
            "'x'"
        );
        assert_eq!(
            quote_argument("x", Some(QuoteMode::Auto), &config, Platform::MacOs),
            "'x'"
        );
    }

    #[test]
    fn test_mode_falls_back_to_config_then_auto() {
        let configured = config_with_mode(Some(QuoteMode::Double));
        assert_eq!(
            quote_argument("x", None, &configured, Platform::Linux),
            "\"x\""
        );

        let single = Some(QuoteMode::Single);
        let explicit_wins = quote_argument("x", single, &configured, Platform::Linux);
        assert_eq!(explicit_wins, "'x'");

        let unset = config_with_mode(None);
        let windows = quote_argument("x", None, &unset, Platform::Windows);
        assert_eq!(windows, "\"x\"");
        assert_eq!(quote_argument("x", None, &unset, Platform::Linux), "'x'");
    }

    #[test]
    fn test_quoting_is_not_idempotent() {
        let config = Config::default();
        let once = quote_argument("x", Some(QuoteMode::Single), &config, Platform::Linux);
        let twice = quote_argument(&once, Some(QuoteMode::Single), &config, Platform::Linux);
        assert_eq!(twice, "'\\'x\\''");
    }

    #[test]
    fn test_escape_regex_all_metacharacters() {
        assert_eq!(
            escape_regex(r".*+?^${}()|[]\"),
            r"\.\*\+\?\^\$\{\}\(\)\|\[\]\\"
        );
        assert_eq!(escape_regex("plain name - 42"), "plain name - 42");
    }

    #[test]
    fn test_quote_test_name_escapes_before_quoting() {
        let config = Config::default();
        let quoted = quote_test_name(
            "My test (snapshot)",
            Some(QuoteMode::Single),
            &config,
            Platform::Linux,
        );
        assert_eq!(quoted, r"'My test \(snapshot\)'");
    }

    #[test]
    fn test_quote_test_name_empty_still_quoted() {
        let config = Config::default();
        assert_eq!(
            quote_test_name("", Some(QuoteMode::Double), &config, Platform::Linux),
            "\"\""
        );
        assert_eq!(quote_test_name("", None, &config, Platform::Linux), "''");
    }

    #[test]
    fn test_escape_round_trip() {
        let names = [
            "My test (snapshot)",
            "a.b*c+d?e^f$g{h}i(j)k|l[m]n\\o",
            "plain",
        ];
        for name in names {
            assert_eq!(unescape_regex(&escape_regex(name)), name);
        }
    }

    #[test]
    fn test_escaping_twice_double_escapes() {
        assert_eq!(escape_regex(&escape_regex("a.b")), r"a\\\.b");
    }

    #[test]
    fn test_quote_mode_deserializes_lowercase() {
        let mode: QuoteMode = serde_json::from_str("\"double\"").unwrap();
        assert_eq!(mode, QuoteMode::Double);
        assert!(serde_json::from_str::<QuoteMode>("\"backtick\"").is_err());
    }
}
