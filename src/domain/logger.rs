//! Logging system: stderr by default, daily-rotated files when a log directory is set.

use anyhow::Result;
use std::fs;
use std::io::IsTerminal;
use std::path::Path;
use time::macros::format_description;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::OffsetTime;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Prefix of rotated log files.
const LOG_FILE_PREFIX: &str = "mid-props";

/// Initialize the logging system.
pub fn init(config: &LogConfig) -> Result<()> {
    let (writer, ansi) = match &config.log_path {
        Some(log_path) => {
            if !log_path.exists() {
                fs::create_dir_all(log_path)?;
            }
            cleanup_old_logs(log_path)?;

            let file_appender = RollingFileAppender::new(Rotation::DAILY, log_path, LOG_FILE_PREFIX);
            (BoxMakeWriter::new(file_appender), false)
        }
        None => (
            BoxMakeWriter::new(std::io::stderr),
            std::io::stderr().is_terminal(),
        ),
    };

    // Use local timezone for timestamps
    let time_format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let local_offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let timer = OffsetTime::new(local_offset, time_format);

    let subscriber = tracing_subscriber::registry()
        .with(log_filter(config))
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(true)
                .with_thread_ids(false)
                .with_timer(timer),
        );

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}

/// Build the level filter.
///
/// `RUST_LOG` is only honoured together with `--debug`: a target directive such as
/// `mid_props=debug` would otherwise enable the tier that discloses configured values.
fn log_filter(config: &LogConfig) -> EnvFilter {
    let level = config.level();
    if config.debug {
        EnvFilter::from_default_env().add_directive(level.into())
    } else {
        EnvFilter::builder()
            .with_default_directive(level.into())
            .parse_lossy("")
    }
}

/// Clean up log files older than 2 days.
pub fn cleanup_old_logs(log_path: &Path) -> Result<()> {
    use std::time::{Duration, SystemTime};

    let two_days = Duration::from_secs(2 * 24 * 60 * 60);
    let cutoff = SystemTime::now() - two_days;

    if !log_path.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(log_path)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n,
            None => continue,
        };

        if !filename.starts_with(LOG_FILE_PREFIX) {
            continue;
        }

        if let Ok(metadata) = entry.metadata() {
            if let Ok(modified) = metadata.modified() {
                if modified < cutoff {
                    let _ = fs::remove_file(&path);
                }
            }
        }
    }

    Ok(())
}
