use crate::cli::parser::{ConfigArgs, ConfigCommands};
use crate::cli::Context;
use crate::config::ConfigManager;
use crate::utils::{JestRunItError, Result};

pub fn execute(args: ConfigArgs, load_context: impl FnOnce() -> Result<Context>) -> Result<i32> {
    match args.command {
        ConfigCommands::Show => execute_show(load_context),
        ConfigCommands::Path => execute_path(),
        ConfigCommands::Init { force } => execute_init(force),
    }
}

fn execute_show(load_context: impl FnOnce() -> Result<Context>) -> Result<i32> {
    let ctx = load_context()?;
    println!("{}", serde_json::to_string_pretty(&ctx.config)?);
    Ok(0)
}

fn execute_path() -> Result<i32> {
    let path = ConfigManager::get_config_path()
        .map_err(|e| JestRunItError::config_error(format!("Failed to get config path: {e}")))?;
    println!("{}", path);
    Ok(0)
}

fn execute_init(force: bool) -> Result<i32> {
    let path = ConfigManager::init(force).map_err(|e| {
        JestRunItError::config_error(format!("Failed to write default configuration: {e}"))
    })?;
    println!("✅ Wrote default configuration to {}", path.display());
    Ok(0)
}
