pub mod exercise_repository;
pub mod user_repository;
