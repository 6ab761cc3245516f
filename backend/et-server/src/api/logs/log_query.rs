use crate::{ApiError, ApiResult};

use et_core::{LogFilter, parse_date, parse_duration};

use chrono::NaiveDate;
use serde::Deserialize;

pub const INVALID_FROM: &str = "Invalid from date format";
pub const INVALID_TO: &str = "Invalid to date format";

/// Query parameters for reading an exercise log
///
/// Kept as raw strings so malformed values produce this API's own errors.
#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

impl LogQuery {
    pub fn into_filter(self) -> ApiResult<LogFilter> {
        let from = Self::parse_bound(self.from, "from", INVALID_FROM)?;
        let to = Self::parse_bound(self.to, "to", INVALID_TO)?;
        let limit = self.limit.as_deref().and_then(parse_duration);

        Ok(LogFilter::new(from, to, limit))
    }

    fn parse_bound(
        raw: Option<String>,
        field: &str,
        message: &str,
    ) -> ApiResult<Option<NaiveDate>> {
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => parse_date(value)
                .map(Some)
                .map_err(|_| ApiError::validation(field, message)),
        }
    }
}
