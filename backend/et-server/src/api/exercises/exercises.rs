//! Exercise REST API handlers

use crate::{ApiError, ApiResult, AppState, CreateExerciseRequest, ExerciseResponse, JsonOrForm, resolve_user};

use et_core::today;

use axum::{
    Json,
    extract::{Path, State},
};

/// POST /api/users/:id/exercises
///
/// An unknown user is reported before anything about the body.
pub async fn log_exercise(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    payload: Result<JsonOrForm<CreateExerciseRequest>, ApiError>,
) -> ApiResult<Json<ExerciseResponse>> {
    // 1. Verify user exists
    let user = resolve_user(&state, &user_id).await?;
    let JsonOrForm(req) = payload?;

    // 2. Validate body
    let exercise = req.into_exercise(today())?;

    // 3. Persist the exercise and link it to the user
    state.exercises().log_for_user(user.id, &exercise).await?;

    log::info!(
        "Logged exercise {} for user {} on {}",
        exercise.id,
        user.id,
        exercise.date
    );

    Ok(Json(ExerciseResponse::new(&user, exercise)))
}
