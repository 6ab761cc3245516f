//! Lenient free-text fields.
//!
//! Clients post descriptions as JSON strings, but numbers and booleans are
//! stored as their text form rather than rejecting the request.

use serde::Deserialize;
use serde::de::IgnoredAny;

/// Raw free-text value as it appears in a request body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TextInput {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Other(IgnoredAny),
}

impl TextInput {
    /// The value as text; `None` for objects, arrays and nulls.
    pub fn into_text(self) -> Option<String> {
        match self {
            TextInput::Text(text) => Some(text),
            TextInput::Integer(value) => Some(value.to_string()),
            TextInput::Float(value) => Some(value.to_string()),
            TextInput::Bool(value) => Some(value.to_string()),
            TextInput::Other(_) => None,
        }
    }
}
