//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::PropertyInput;

/// Build machine ID properties for audit event enrichment
#[derive(Parser)]
#[command(
    name = "mid-props",
    version,
    about = "Build machine ID properties for audit event enrichment",
    long_about = "Resolves string-keyed configuration into typed machine ID properties, \
                  applying defaults and keeping unrecognized keys for downstream processors."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (discloses configured values; do not use in production).
    /// RUST_LOG is ignored unless this flag is set
    #[arg(long, global = true)]
    pub debug: bool,

    /// Write logs to daily-rotated files in this directory instead of stderr
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// Output format for the resolved properties
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Pretty-printed JSON (default)
    #[default]
    Json,
    /// One `name = value` line per field
    Text,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve properties from one source and print them (alias: run)
    #[command(alias = "run")]
    Build {
        /// TOML property file
        #[arg(long, short = 'f', conflicts_with = "define")]
        file: Option<PathBuf>,

        /// Property definition, may be repeated
        #[arg(short = 'D', long = "define", value_name = "KEY=VALUE")]
        define: Vec<String>,

        /// Output format
        #[arg(long, default_value = "json")]
        format: Format,
    },
    /// Generate a property file template
    Init {
        /// Path where to create the property file
        #[arg(long, short = 'p')]
        path: Option<PathBuf>,
    },
    /// List recognized keys and their defaults
    Keys,
    /// Display version information
    Version,
}

/// Pick the single property source named by the `build` arguments.
pub fn property_input(file: Option<PathBuf>, define: Vec<String>) -> PropertyInput {
    match file {
        Some(path) => PropertyInput::File(path),
        None => PropertyInput::Definitions(define),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_definitions() {
        let cli = Cli::try_parse_from([
            "mid-props",
            "build",
            "-Daudit.processor.mid.fromEnv=true",
            "-D",
            "custom.key=custom.value",
            "--format",
            "text",
        ])
        .unwrap();

        match cli.command {
            Commands::Build {
                file,
                define,
                format,
            } => {
                assert!(file.is_none());
                assert_eq!(
                    define,
                    vec!["audit.processor.mid.fromEnv=true", "custom.key=custom.value"]
                );
                assert_eq!(format, Format::Text);
            }
            _ => panic!("expected build"),
        }
    }

    #[test]
    fn test_file_conflicts_with_definitions() {
        let result =
            Cli::try_parse_from(["mid-props", "build", "-f", "a.toml", "-Dkey=value"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_property_input() {
        assert_eq!(
            property_input(Some(PathBuf::from("a.toml")), Vec::new()),
            PropertyInput::File(PathBuf::from("a.toml"))
        );
        assert_eq!(
            property_input(None, vec!["k=v".to_string()]),
            PropertyInput::Definitions(vec!["k=v".to_string()])
        );
    }
}
