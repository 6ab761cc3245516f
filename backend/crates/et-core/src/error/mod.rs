use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid date '{value}' {location}")]
    InvalidDate {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn validation<S: Into<String>>(field: &str, message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_date<S: Into<String>>(value: S) -> Self {
        CoreError::InvalidDate {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
