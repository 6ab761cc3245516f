//! Calendar date parsing and display formatting.
//!
//! Exercise dates are plain calendar days. Every input kind (typed chrono
//! values or user-supplied strings) is reduced to a [`NaiveDate`] through
//! [`CalendarDate`], and rendered as `Www Mon DD YYYY` (e.g. `Mon Jan 01 2024`).

use crate::{CoreError, Result as CoreResult};

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Display format: short weekday, short month, zero-padded day, full year.
pub const DISPLAY_FORMAT: &str = "%a %b %d %Y";

/// Storage format, also the canonical input format.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Anything that can be reduced to a calendar day.
pub trait CalendarDate {
    fn to_calendar_date(&self) -> CoreResult<NaiveDate>;
}

impl CalendarDate for NaiveDate {
    fn to_calendar_date(&self) -> CoreResult<NaiveDate> {
        Ok(*self)
    }
}

impl CalendarDate for NaiveDateTime {
    fn to_calendar_date(&self) -> CoreResult<NaiveDate> {
        Ok(self.date())
    }
}

impl<Tz: TimeZone> CalendarDate for DateTime<Tz> {
    fn to_calendar_date(&self) -> CoreResult<NaiveDate> {
        Ok(self.date_naive())
    }
}

impl CalendarDate for str {
    fn to_calendar_date(&self) -> CoreResult<NaiveDate> {
        parse_date(self)
    }
}

impl CalendarDate for String {
    fn to_calendar_date(&self) -> CoreResult<NaiveDate> {
        parse_date(self)
    }
}

impl<T: CalendarDate + ?Sized> CalendarDate for &T {
    fn to_calendar_date(&self) -> CoreResult<NaiveDate> {
        (**self).to_calendar_date()
    }
}

/// Parse a user-supplied date.
///
/// Accepted forms (surrounding whitespace ignored):
/// - `2024-01-01`
/// - `2024-01-01T10:30:00`, `2024-01-01T10:30`, `2024-01-01 10:30:00`
/// - RFC 3339, e.g. `2024-01-01T10:30:00Z` or `2024-01-01T10:30:00+02:00`
/// - the display form, e.g. `Mon Jan 01 2024`
///
/// Datetimes keep the calendar day as written; no timezone conversion.
#[track_caller]
pub fn parse_date(input: &str) -> CoreResult<NaiveDate> {
    let trimmed = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, ISO_FORMAT) {
        return Ok(date);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(datetime.date_naive());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(datetime.date());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DISPLAY_FORMAT) {
        return Ok(date);
    }

    Err(CoreError::invalid_date(input))
}

/// Parse `input` into a calendar day and render it for display.
pub fn format_date<D: CalendarDate + ?Sized>(input: &D) -> CoreResult<String> {
    input.to_calendar_date().map(render_date)
}

/// Render an already-parsed day, e.g. `Mon Jan 01 2024`.
pub fn render_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// The server's current calendar day.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
