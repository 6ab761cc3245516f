pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod request_logging;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::ErrorResponse,
    error::Result as ApiResult,
    exercises::{
        create_exercise_request::CreateExerciseRequest, exercise_response::ExerciseResponse,
        exercises::log_exercise,
    },
    extractors::json_or_form::JsonOrForm,
    logs::{
        log_entry_dto::LogEntryDto, log_query::LogQuery, log_response::LogResponse,
        logs::get_exercise_log,
    },
    resolve::resolve_user,
    users::{
        create_user_request::CreateUserRequest,
        user_dto::UserDto,
        users::{create_user, list_users},
    },
};
pub use app_state::AppState;
pub use routes::build_router;
