use crate::{CoreError, Result as CoreResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,

    /// Exercise ids in the order they were logged
    pub exercises: Vec<Uuid>,

    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            exercises: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Require a username with at least one non-whitespace character.
    ///
    /// Uniqueness is left to the store.
    #[track_caller]
    pub fn validate_username(username: Option<String>) -> CoreResult<String> {
        match username {
            Some(name) if !name.trim().is_empty() => Ok(name),
            Some(_) => Err(CoreError::validation("username", "username cannot be blank")),
            None => Err(CoreError::validation("username", "username is required")),
        }
    }
}
