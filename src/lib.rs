pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod platform;
pub mod utils;

pub use config::{Config, ConfigManager};
pub use core::command::{
    build_debug_launch, build_run_command, DebugLaunchDescriptor, LaunchConfiguration, RunRequest,
    ShellCommand,
};
pub use core::env::{parse_environment_string, EnvironmentMap};
pub use core::quote::{escape_regex, quote_argument, quote_test_name, QuoteMode};
pub use platform::Platform;
pub use utils::{JestRunItError, Result};
