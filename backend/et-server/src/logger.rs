use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt::Arguments;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record};

/// Where log lines go once the logger is installed
enum Sink {
    Colored,
    Plain,
    File(PathBuf),
}

/// Install the global logger.
///
/// Lines look like `[2024-01-01T10:00:00Z - INFO] message [src/main.rs:42]`.
/// A `log_file` wins over stdout; `colored` only applies to stdout.
pub fn initialize(
    log_level: et_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level: LevelFilter = log_level.into();

    let sink = match log_file {
        Some(path) => Sink::File(path),
        None if colored => Sink::Colored,
        None => Sink::Plain,
    };

    let output = match &sink {
        Sink::File(path) => Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, record.level()))
            .chain(open_log_file(path)?),
        Sink::Colored => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, message, record, colors.color(record.level()))
                })
                .chain(std::io::stdout())
        }
        Sink::Plain => Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, record.level()))
            .chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level)
        // Statement logging from sqlx drowns the request log
        .level_for("sqlx", LevelFilter::Warn)
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match &sink {
        Sink::File(path) => log::info!("Logging at {} to {}", level, path.display()),
        Sink::Colored | Sink::Plain => log::info!("Logging at {} to stdout", level),
    }

    // Dependencies that emit `tracing` events end up in the same output
    tracing_log::LogTracer::init().ok();

    Ok(())
}

fn write_line(
    out: FormatCallback,
    message: &Arguments,
    record: &Record,
    level: impl std::fmt::Display,
) {
    out.finish(format_args!(
        "[{} - {}] {} [{}:{}]",
        humantime::format_rfc3339(SystemTime::now()),
        level,
        message,
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    ))
}

fn open_log_file(path: &Path) -> ServerErrorResult<std::fs::File> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to open log file {}: {}", path.display(), e),
        })
}
