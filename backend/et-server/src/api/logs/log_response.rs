use crate::LogEntryDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub username: String,
    pub count: usize,
    #[serde(rename = "_id")]
    pub id: String,
    pub log: Vec<LogEntryDto>,
}
