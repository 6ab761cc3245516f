use crate::DEFAULT_LOG_LEVEL;

use std::convert::Infallible;
use std::ops::Deref;
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;
use serde::de::IgnoredAny;

/// Verbosity as written in `config.toml` or `ET_LOG_LEVEL`.
///
/// Names are case-insensitive and `warning` is accepted for `warn`. An
/// unknown name, or a value that is not a string at all, selects the
/// default level instead of failing the whole config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "RawLevel")]
pub struct LogLevel(pub LevelFilter);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLevel {
    Name(String),
    Other(IgnoredAny),
}

impl From<RawLevel> for LogLevel {
    fn from(raw: RawLevel) -> Self {
        match raw {
            RawLevel::Name(name) => LogLevel::parse_lenient(&name),
            RawLevel::Other(_) => LogLevel::default(),
        }
    }
}

impl LogLevel {
    pub fn parse_lenient(name: &str) -> Self {
        let filter = match name.trim().to_ascii_lowercase().as_str() {
            "off" => LevelFilter::Off,
            "error" => LevelFilter::Error,
            "warn" | "warning" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => DEFAULT_LOG_LEVEL,
        };
        LogLevel(filter)
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel(DEFAULT_LOG_LEVEL)
    }
}

impl FromStr for LogLevel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LogLevel::parse_lenient(s))
    }
}

impl Deref for LogLevel {
    type Target = LevelFilter;

    fn deref(&self) -> &LevelFilter {
        &self.0
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}
