use crate::render_date;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub id: Uuid,
    pub description: Option<String>,

    /// Minutes; `None` when the submitted value had no leading integer
    pub duration: Option<i64>,

    pub date: NaiveDate,

    pub created_at: DateTime<Utc>,
}

impl Exercise {
    pub fn new(description: Option<String>, duration: Option<i64>, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            description,
            duration,
            date,
            created_at: Utc::now(),
        }
    }

    pub fn display_date(&self) -> String {
        render_date(self.date)
    }
}
