//! Runtime configuration data types for the command-line tool.

use std::path::PathBuf;
use tracing::Level;

/// Where the raw properties come from. Exactly one source is used per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyInput {
    /// A TOML file, flattened to dotted keys
    File(PathBuf),

    /// `KEY=VALUE` definitions given on the command line
    Definitions(Vec<String>),
}

/// Logging settings.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Enable the DEBUG tier, which discloses configured values
    pub debug: bool,

    /// Only log warnings and errors
    pub quiet: bool,

    /// Log to daily-rotated files in this directory instead of stderr
    pub log_path: Option<PathBuf>,
}

impl LogConfig {
    /// Maximum level to emit. `debug` wins over `quiet`.
    pub fn level(&self) -> Level {
        if self.debug {
            Level::DEBUG
        } else if self.quiet {
            Level::WARN
        } else {
            Level::INFO
        }
    }
}

/// Get the directory holding mid-props files.
pub fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("mid-props")
}
