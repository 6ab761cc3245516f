use error_location::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to decode {entity} row: {message} {location}")]
    Decode {
        entity: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn decode<S: Into<String>>(entity: &'static str, message: S) -> Self {
        DbError::Decode {
            entity,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The message reported by the database itself when there is one,
    /// e.g. `UNIQUE constraint failed: users.username`.
    pub fn message(&self) -> String {
        match self {
            DbError::Sqlx { source, .. } => match source.as_database_error() {
                Some(db_error) => db_error.message().to_string(),
                None => source.to_string(),
            },
            DbError::Migration { message, .. }
            | DbError::Initialization { message, .. }
            | DbError::Decode { message, .. } => message.clone(),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
