//! Lenient integer parsing for exercise durations.
//!
//! Durations arrive as JSON numbers, JSON strings, or form fields. Text is
//! read up to the first non-digit (`"30 min"` is 30); input without a leading
//! integer yields `None`, which is stored and rendered as `null`. Values
//! that are neither numbers nor text (`true`, objects, arrays) are accepted
//! and also yield `None`.

use serde::Deserialize;
use serde::de::IgnoredAny;

/// Raw duration as it appears in a request body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DurationInput {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

impl DurationInput {
    /// Whole minutes, or `None` when the input carries no integer.
    pub fn minutes(&self) -> Option<i64> {
        match self {
            DurationInput::Integer(value) => Some(*value),
            DurationInput::Float(value) if value.is_finite() => Some(value.trunc() as i64),
            DurationInput::Float(_) => None,
            DurationInput::Text(text) => parse_duration(text),
            DurationInput::Other(_) => None,
        }
    }
}

/// Parse the leading integer of `raw`: optional whitespace, optional sign,
/// then digits. Anything after the digits is ignored.
pub fn parse_duration(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();

    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digit_count = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        return None;
    }

    let magnitude: i64 = unsigned[..digit_count].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
