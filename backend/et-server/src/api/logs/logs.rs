//! Exercise log REST API handler

use crate::{ApiError, ApiResult, AppState, LogEntryDto, LogQuery, LogResponse, resolve_user};

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};

pub const EXERCISES_NOT_FOUND: &str = "Exercises not found";

/// GET /api/users/:id/logs?from=&to=&limit=
///
/// An empty result is a 404, also for users who have never logged anything.
pub async fn get_exercise_log(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    query: Result<Query<LogQuery>, QueryRejection>,
) -> ApiResult<Json<LogResponse>> {
    let user = resolve_user(&state, &user_id).await?;
    let Query(query) = query.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let filter = query.into_filter()?;

    let exercises = state.exercises().find_log(user.id, &filter).await?;
    if exercises.is_empty() {
        return Err(ApiError::not_found(EXERCISES_NOT_FOUND));
    }

    log::debug!(
        "Returning {} exercises for user {} ({:?})",
        exercises.len(),
        user.id,
        filter
    );

    Ok(Json(LogResponse {
        username: user.username,
        count: exercises.len(),
        id: user.id.to_string(),
        log: exercises.into_iter().map(LogEntryDto::from).collect(),
    }))
}
