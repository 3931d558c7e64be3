//! Property source management for the command-line tool.
//!
//! Handles TOML property file loading, command-line definitions, and template generation.

mod service;
mod types;

pub use service::SourceService;
pub use types::{default_config_dir, LogConfig, PropertyInput};
