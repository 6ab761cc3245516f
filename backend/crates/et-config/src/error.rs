use std::io;
use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    /// A setting that loaded fine but is unusable, e.g. a privileged port
    #[error("Invalid [{section}] setting: {message} {location}")]
    Invalid {
        section: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed config file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn invalid<S: Into<String>>(section: &'static str, message: S) -> Self {
        ConfigError::Invalid {
            section,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::invalid("server", message)
    }

    #[track_caller]
    pub fn database<S: Into<String>>(message: S) -> Self {
        Self::invalid("database", message)
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
