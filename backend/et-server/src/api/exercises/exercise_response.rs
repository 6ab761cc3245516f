use et_core::{Exercise, User};

use serde::Serialize;

/// Echo of a logged exercise. `_id` is the owning user's id.
#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub duration: Option<i64>,
    pub date: String,
    #[serde(rename = "_id")]
    pub id: String,
}

impl ExerciseResponse {
    pub fn new(user: &User, exercise: Exercise) -> Self {
        Self {
            username: user.username.clone(),
            date: exercise.display_date(),
            description: exercise.description,
            duration: exercise.duration,
            id: user.id.to_string(),
        }
    }
}
