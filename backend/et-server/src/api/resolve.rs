//! Path id resolution

use crate::{ApiError, AppState};

use et_core::User;

use uuid::Uuid;

pub const USER_NOT_FOUND: &str = "User not found";

/// Load the user named by a path id.
///
/// Ids are opaque to clients: one that is not a valid id is reported the
/// same way as one that does not exist.
pub async fn resolve_user(state: &AppState, id: &str) -> Result<User, ApiError> {
    let Ok(user_id) = Uuid::parse_str(id) else {
        log::debug!("Unparseable user id '{}'", id);
        return Err(ApiError::not_found(USER_NOT_FOUND));
    };

    state
        .users()
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(USER_NOT_FOUND))
}
