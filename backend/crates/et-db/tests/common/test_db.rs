use et_db::Database;

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    Database::connect_in_memory()
        .await
        .expect("Failed to create test database")
        .pool()
        .clone()
}

/// Number of stored exercise rows with this id, linked or not
pub async fn count_exercise_rows(pool: &SqlitePool, exercise_id: uuid::Uuid) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM exercises WHERE id = ?")
        .bind(exercise_id.to_string())
        .fetch_one(pool)
        .await
        .expect("Failed to count exercises")
}
