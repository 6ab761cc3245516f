use et_core::{Exercise, User};
use et_db::{ExerciseRepository, UserRepository};

use chrono::NaiveDate;
use sqlx::SqlitePool;

pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Creates and persists a user
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> User {
    let user = User::new(username.to_string());
    UserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");
    user
}

/// Creates a test Exercise with sensible defaults
pub fn create_test_exercise(date: NaiveDate) -> Exercise {
    Exercise::new(Some("Running".to_string()), Some(30), date)
}

/// Logs an exercise on the given day against the user
pub async fn log_test_exercise(pool: &SqlitePool, user: &User, date: NaiveDate) -> Exercise {
    let exercise = create_test_exercise(date);
    ExerciseRepository::new(pool.clone())
        .log_for_user(user.id, &exercise)
        .await
        .expect("Failed to log test exercise");
    exercise
}
