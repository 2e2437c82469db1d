//! Assembly of the interactive shell command and the debug launch.
//!
//! Both builders are pure: the configuration snapshot and the platform are
//! passed in, nothing is read from the environment, and nothing fails. A
//! missing optional setting just leaves its flag out.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::config::defaults::TERMINAL_NAME;
use crate::config::Config;
use crate::core::env::{parse_environment_string, EnvironmentMap};
use crate::core::quote::{quote_argument, quote_test_name, QuoteMode};
use crate::platform::Platform;
use crate::utils::{JestRunItError, Result};

/// Forces Jest to run serially in one process so breakpoints are hit
/// deterministically.
pub const RUN_IN_BAND_FLAG: &str = "--runInBand";
pub const NODE_RUNTIME: &str = "node";
const WORKSPACE_FOLDER: &str = "${workspaceFolder}";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunRequest {
    pub file_path: String,
    /// `None` runs the whole file.
    pub test_name: Option<String>,
    pub update_snapshots: bool,
    /// Appended after the configured `jestCLIOptions`.
    pub extra_args: Vec<String>,
    /// Overrides the configured `environmentVariables` when non-blank.
    pub env_string: String,
}

impl RunRequest {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            ..Self::default()
        }
    }

    pub fn with_test_name(mut self, test_name: impl Into<String>) -> Self {
        self.test_name = Some(test_name.into());
        self
    }

    pub fn with_update_snapshots(mut self, update_snapshots: bool) -> Self {
        self.update_snapshots = update_snapshots;
        self
    }

    pub fn with_extra_args(mut self, extra_args: Vec<String>) -> Self {
        self.extra_args = extra_args;
        self
    }

    pub fn with_env_string(mut self, env_string: impl Into<String>) -> Self {
        self.env_string = env_string.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.file_path.trim().is_empty() {
            return Err(JestRunItError::invalid_args(
                "Test file path cannot be empty",
            ));
        }
        Ok(())
    }

    fn environment<'a>(&'a self, config: &'a Config) -> &'a str {
        if self.env_string.trim().is_empty() {
            config.get_environment_variables()
        } else {
            &self.env_string
        }
    }
}

/// Command line for a terminal-like sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand(String);

impl ShellCommand {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Name of the terminal the command is meant to be sent to. An existing
    /// terminal with this name is reused by the host.
    pub fn terminal_name(&self) -> &'static str {
        TERMINAL_NAME
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugLaunchDescriptor {
    /// Runner path as configured; the host resolves it against the project
    /// root.
    pub program: String,
    pub args: Vec<String>,
    pub env: EnvironmentMap,
    pub runtime: &'static str,
}

/// Editor-facing rendering of a [`DebugLaunchDescriptor`], shaped like a
/// VS Code `launch.json` entry.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LaunchConfiguration {
    #[serde(rename = "type")]
    pub kind: String,
    pub request: String,
    pub name: String,
    pub console: String,
    pub internal_console_options: String,
    pub program: String,
    pub args: Vec<String>,
    pub env: EnvironmentMap,
}

impl DebugLaunchDescriptor {
    pub fn to_launch_configuration(&self) -> LaunchConfiguration {
        let program = if is_absolute_program(&self.program) {
            self.program.clone()
        } else {
            format!("{WORKSPACE_FOLDER}/{}", self.program)
        };

        LaunchConfiguration {
            kind: self.runtime.to_string(),
            request: "launch".to_string(),
            name: TERMINAL_NAME.to_string(),
            console: "integratedTerminal".to_string(),
            internal_console_options: "neverOpen".to_string(),
            program,
            args: self.args.clone(),
            env: self.env.clone(),
        }
    }
}

fn is_absolute_program(program: &str) -> bool {
    let bytes = program.as_bytes();
    program.starts_with('/')
        || program.starts_with('\\')
        || program.starts_with("${")
        || (bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':')
}

/// Build the command sent to the terminal, in this order: raw environment
/// prefix, runner, quoted file path, `-t`, `-c`, `-u`, configured options,
/// request extras.
pub fn build_run_command(req: &RunRequest, config: &Config, platform: Platform) -> ShellCommand {
    let jest_path = config
        .get_jest_path()
        .unwrap_or_else(|| platform.default_jest_path());

    let mut command = format!(
        "{} {} {}",
        req.environment(config),
        jest_path,
        quote_argument(&req.file_path, None, config, platform)
    );

    if let Some(test_name) = &req.test_name {
        command.push_str(" -t ");
        command.push_str(&quote_test_name(test_name, None, config, platform));
    }
    if let Some(jest_config_path) = config.get_jest_config_path() {
        command.push_str(" -c ");
        command.push_str(jest_config_path);
    }
    if req.update_snapshots {
        command.push_str(" -u");
    }
    for option in config.jest_cli_options.iter().chain(&req.extra_args) {
        command.push(' ');
        command.push_str(option);
    }

    let command = ShellCommand(command.trim().to_string());
    debug!(%platform, command = %command, "built run command");
    command
}

/// Build the debug launch. Every argument is its own array element, so the
/// file path and test name are not shell-quoted; the test name is still
/// regex-escaped.
pub fn build_debug_launch(
    req: &RunRequest,
    config: &Config,
    platform: Platform,
) -> DebugLaunchDescriptor {
    let program = config
        .get_jest_path()
        .unwrap_or_else(|| platform.default_jest_debug_path())
        .to_string();

    let mut args = vec![req.file_path.clone()];
    if let Some(test_name) = &req.test_name {
        args.push("-t".to_string());
        let escaped = quote_test_name(test_name, Some(QuoteMode::None), config, platform);
        args.push(escaped);
    }
    if let Some(jest_config_path) = config.get_jest_config_path() {
        args.push("-c".to_string());
        args.push(jest_config_path.to_string());
    }
    args.extend(config.jest_cli_options.iter().cloned());
    args.extend(req.extra_args.iter().cloned());
    args.push(RUN_IN_BAND_FLAG.to_string());

    let env = parse_environment_string(req.environment(config));

    debug!(%platform, program = %program, args = ?args, "built debug launch");
    DebugLaunchDescriptor {
        program,
        args,
        env,
        runtime: NODE_RUNTIME,
    }
}
