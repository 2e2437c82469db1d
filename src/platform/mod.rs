
use clap::ValueEnum;
use std::fmt;

use crate::config::defaults::{DEFAULT_JEST_DEBUG_PATH_WINDOWS, DEFAULT_JEST_PATH};

/// Host operating system family. Anything that changes generated output per
/// OS takes one of these explicitly instead of sniffing the environment.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Windows,
    #[value(name = "macos")]
    MacOs,
    Linux,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(any(target_os = "macos", target_os = "freebsd")) {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    /// Map a Node.js `process.platform` name onto a family.
    ///
    /// `win*` is Windows, `darwin` and `freebsd` group with macOS, and
    /// everything else (aix, android, linux, openbsd, sunos...) is Linux.
    pub fn from_node_name(name: &str) -> Self {
        if name.starts_with("win") {
            Platform::Windows
        } else if matches!(name, "darwin" | "freebsd") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    pub fn is_windows(self) -> bool {
        self == Platform::Windows
    }

    /// Runner path used for interactive runs when none is configured.
    pub fn default_jest_path(self) -> &'static str {
        DEFAULT_JEST_PATH
    }

    /// Runner path used for debug launches when none is configured. On
    /// Windows `.bin/jest` is a cmd shim node cannot execute, so the debugger
    /// gets the script entry point instead.
    pub fn default_jest_debug_path(self) -> &'static str {
        match self {
            Platform::Windows => DEFAULT_JEST_DEBUG_PATH_WINDOWS,
            Platform::MacOs | Platform::Linux => DEFAULT_JEST_PATH,
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
        };
        f.write_str(name)
    }
}
