use crate::{ApiError, ApiResult};

use et_core::{DurationInput, Exercise, TextInput, parse_date};

use chrono::NaiveDate;
use serde::Deserialize;

pub const INVALID_DATE: &str = "Invalid date format";

/// Body of an exercise log request.
///
/// Every field is read leniently: wrongly typed values are coerced or
/// dropped here instead of failing body deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateExerciseRequest {
    /// Free text; numbers and booleans are kept in their text form
    #[serde(default)]
    pub description: Option<TextInput>,

    /// Number or numeric text; a value without a leading integer is kept as null
    #[serde(default)]
    pub duration: Option<DurationInput>,

    /// Calendar day; missing or empty means today
    #[serde(default)]
    pub date: Option<TextInput>,
}

impl CreateExerciseRequest {
    /// Validate into an exercise, defaulting the date to `today`.
    pub fn into_exercise(self, today: NaiveDate) -> ApiResult<Exercise> {
        let raw_date = self.date.and_then(TextInput::into_text);
        let date = match raw_date.as_deref().map(str::trim) {
            None | Some("") => today,
            Some(raw) => parse_date(raw).map_err(|_| ApiError::validation("date", INVALID_DATE))?,
        };

        let duration = self.duration.as_ref().and_then(DurationInput::minutes);
        let description = self.description.and_then(TextInput::into_text);

        Ok(Exercise::new(description, duration, date))
    }
}
