use et_core::Exercise;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LogEntryDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub duration: Option<i64>,
    pub date: String,
}

impl From<Exercise> for LogEntryDto {
    fn from(e: Exercise) -> Self {
        Self {
            date: e.display_date(),
            description: e.description,
            duration: e.duration,
        }
    }
}
