use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::core::quote::QuoteMode;
use crate::platform::Platform;

#[derive(Parser, Debug)]
#[command(name = "jest-run-it")]
#[command(about = "Build Jest commands for a single test or test file")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Read settings from this JSON file instead of the workspace/user config
    #[arg(long = "config", global = true, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Workspace root used to find .vscode/settings.json
    #[arg(long, global = true)]
    pub workspace: Option<PathBuf>,

    /// Generate output for this platform instead of the host
    #[arg(long, global = true, value_enum)]
    pub platform: Option<Platform>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the shell command that runs a test file or a single test
    Run(RunArgs),
    /// Print a debug launch configuration as JSON
    Debug(DebugArgs),
    /// Parse an environment string and print it as JSON
    Env(EnvArgs),
    /// Print run/debug/update-snapshot lenses for a parsed test tree
    Lenses(LensesArgs),
    /// Print explorer items for a parsed test tree
    Tree(TreeArgs),
    /// Check whether a path matches the test file patterns
    Matches(MatchesArgs),
    /// Inspect or initialize configuration
    Config(ConfigArgs),
    /// Generate shell completion script
    Completion(CompletionArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Test file to run
    pub file: String,

    /// Test name to run (regex metacharacters are escaped)
    #[arg(long, short = 't', allow_hyphen_values = true)]
    pub test_name: Option<String>,

    /// Update snapshots (-u)
    #[arg(long, short = 'u')]
    pub update_snapshots: bool,

    /// Override the configured argument quoting
    #[arg(long, value_enum)]
    pub quotes: Option<QuoteMode>,

    /// Environment string, replacing the configured one
    #[arg(long, allow_hyphen_values = true)]
    pub env: Option<String>,

    /// Extra arguments appended verbatim after `--`
    #[arg(last = true)]
    pub extra: Vec<String>,
}

#[derive(Args, Debug)]
pub struct DebugArgs {
    /// Test file to debug
    pub file: String,

    /// Test name to debug (regex metacharacters are escaped)
    #[arg(long, short = 't', allow_hyphen_values = true)]
    pub test_name: Option<String>,

    /// Environment string, replacing the configured one
    #[arg(long, allow_hyphen_values = true)]
    pub env: Option<String>,

    /// Extra arguments appended verbatim after `--`
    #[arg(last = true)]
    pub extra: Vec<String>,
}

#[derive(Args, Debug)]
pub struct EnvArgs {
    /// Raw environment string, e.g. 'NODE_ENV=test MSG="a b"'
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

#[derive(Args, Debug)]
pub struct LensesArgs {
    /// JSON file holding the parsed test tree
    #[arg(long)]
    pub tree: PathBuf,

    /// JSON file holding snapshot locations
    #[arg(long)]
    pub snapshots: Option<PathBuf>,

    /// The document has unsaved changes
    #[arg(long)]
    pub dirty: bool,
}

#[derive(Args, Debug)]
pub struct TreeArgs {
    /// JSON file holding the parsed test tree
    #[arg(long)]
    pub tree: PathBuf,
}

#[derive(Args, Debug)]
pub struct MatchesArgs {
    /// Path to check
    pub file: String,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Print the user config file path
    Path,
    /// Write the default configuration to the user config file
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// Shell to generate completion for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl RunArgs {
    pub fn validate(&self) -> crate::utils::Result<()> {
        validate_file_arg(&self.file)
    }
}

impl DebugArgs {
    pub fn validate(&self) -> crate::utils::Result<()> {
        validate_file_arg(&self.file)
    }
}

pub fn validate_file_arg(file: &str) -> crate::utils::Result<()> {
    if file.trim().is_empty() {
        return Err(crate::utils::JestRunItError::invalid_args(
            "Test file path cannot be empty",
        ));
    }
    Ok(())
}
