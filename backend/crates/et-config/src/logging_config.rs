use crate::{DEFAULT_LOG_COLORED, DEFAULT_LOG_DIRECTORY, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Directory for the log file, relative to the config dir
    pub dir: String,
    /// Log file name; stdout when unset
    pub file: Option<String>,
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: None,
            colored: DEFAULT_LOG_COLORED,
        }
    }
}
