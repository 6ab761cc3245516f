use et_core::User;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UserDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    /// Exercise ids in log order
    pub exercises: Vec<String>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            username: u.username,
            exercises: u.exercises.iter().map(ToString::to_string).collect(),
        }
    }
}
