//! Logging initialization for the CLI.
//!
//! Logs go to stderr so stdout only ever carries the generated command or
//! JSON.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const DEBUG_ENV_VAR: &str = "JEST_RUN_IT_DEBUG";

/// Map `-v` occurrences to a level. `JEST_RUN_IT_DEBUG` raises it to at least
/// DEBUG.
pub fn level_for(verbosity: u8, debug_env: bool) -> Level {
    match verbosity {
        0 if debug_env => Level::DEBUG,
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. `RUST_LOG` is honored; the verbosity flag
/// adds a directive for this crate on top of it.
pub fn init(verbosity: u8) {
    let level = level_for(verbosity, std::env::var(DEBUG_ENV_VAR).is_ok());

    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Ok(directive) = format!("jest_run_it={level}").parse() {
        filter = filter.add_directive(directive);
    }

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();
}
