pub mod create_exercise_request;
pub mod exercise_response;
#[allow(clippy::module_inception)]
pub mod exercises;
