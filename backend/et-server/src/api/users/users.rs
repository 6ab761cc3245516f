//! User REST API handlers

use crate::{ApiError, ApiResult, AppState, CreateUserRequest, JsonOrForm, UserDto};

use et_core::User;

use axum::{Json, extract::State};

/// POST /api/users
///
/// Every failure, including a duplicate username, answers 200 with an
/// `{error}` body.
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<JsonOrForm<CreateUserRequest>, ApiError>,
) -> ApiResult<Json<UserDto>> {
    let user = insert_user(&state, payload)
        .await
        .map_err(ApiError::into_rejected)?;

    log::info!("Created user {} ({})", user.username, user.id);

    Ok(Json(user.into()))
}

async fn insert_user(
    state: &AppState,
    payload: Result<JsonOrForm<CreateUserRequest>, ApiError>,
) -> ApiResult<User> {
    let JsonOrForm(req) = payload?;
    let username = User::validate_username(req.username)?;

    let user = User::new(username);
    state.users().create(&user).await?;

    Ok(user)
}

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserDto>>> {
    let users = state.users().find_all().await?;

    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}
