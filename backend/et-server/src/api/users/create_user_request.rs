use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Required; checked by `User::validate_username`
    #[serde(default)]
    pub username: Option<String>,
}
