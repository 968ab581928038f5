use crate::error::{Result as ServerErrorResult, ServerError};

use gw_config::LogLevel;

use std::fmt::Arguments;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{Record, info};

fn write_line<L: std::fmt::Display>(
    out: FormatCallback,
    level: L,
    message: &Arguments,
    record: &Record,
) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        level = level,
        message = message,
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}

/// Install the global logger.
///
/// `log_file = None` logs to stdout; `colored` only applies there.
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    let output = if let Some(ref log_path) = log_file {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ServerError::Logger {
                message: format!("Failed to create log directory {}: {}", parent.display(), e),
            })?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .map_err(|e| ServerError::Logger {
                message: format!("Failed to open log file {}: {}", log_path.display(), e),
            })?;

        Dispatch::new()
            .format(|out, message, record| write_line(out, record.level(), message, record))
            .chain(file)
    } else if colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new()
            .format(move |out, message, record| {
                write_line(out, colors.color(record.level()), message, record)
            })
            .chain(std::io::stdout())
    } else {
        // systemd, docker logs
        Dispatch::new()
            .format(|out, message, record| write_line(out, record.level(), message, record))
            .chain(std::io::stdout())
    };

    Dispatch::new()
        .level(level_filter)
        // reqwest/hyper internals are noisy at debug
        .level_for("hyper_util", log::LevelFilter::Warn)
        .level_for("reqwest", log::LevelFilter::Warn)
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={}, file={}",
            log_level,
            path.display()
        ),
        None => info!("Logger initialized: level={}, stdout", log_level),
    }

    tracing_log::LogTracer::init().ok();

    Ok(())
}
