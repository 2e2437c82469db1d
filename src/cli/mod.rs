pub mod commands;
pub mod parser;


pub use parser::{Cli, Commands};

use crate::config::{Config, ConfigManager};
use crate::platform::Platform;
use crate::utils::{JestRunItError, Result};
use std::path::{Path, PathBuf};

/// What a command gets to work with: the configuration snapshot, the target
/// platform and the workspace root.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub platform: Platform,
    pub workspace: PathBuf,
}

/// Run a parsed command line and return the process exit code.
pub fn execute_command(cli: Cli) -> Result<i32> {
    execute_command_with_config(cli, None)
}

pub fn execute_command_with_config(cli: Cli, test_config: Option<Config>) -> Result<i32> {
    let config_file = cli.config_file;
    let workspace = cli.workspace;
    let platform = cli.platform.unwrap_or_default();

    // Only commands that need settings pay for loading them.
    let load_context = move || -> Result<Context> {
        let workspace = match workspace {
            Some(path) => path,
            None => std::env::current_dir()?,
        };
        let config = match test_config {
            Some(cfg) => cfg,
            None => load_config(config_file.as_deref(), &workspace)?,
        };
        Ok(Context {
            config,
            platform,
            workspace,
        })
    };

    match cli.command {
        Commands::Run(args) => {
            args.validate()?;
            commands::run::execute(&load_context()?, args)
        }
        Commands::Debug(args) => {
            args.validate()?;
            commands::debug::execute(&load_context()?, args)
        }
        Commands::Env(args) => commands::env::execute(args),
        Commands::Lenses(args) => commands::lenses::execute(&load_context()?, args),
        Commands::Tree(args) => commands::tree::execute(args),
        Commands::Matches(args) => commands::matches::execute(&load_context()?, args),
        Commands::Config(args) => commands::config::execute(args, load_context),
        Commands::Completion(args) => commands::completion::execute(args),
    }
}

fn load_config(config_file: Option<&Path>, workspace: &Path) -> Result<Config> {
    ConfigManager::load_for_workspace(config_file, workspace).map_err(|e| {
        JestRunItError::config_error(format!("Failed to load config: {}", e))
    })
}
