use crate::{DbError, Result as DbErrorResult};

use et_core::User;

use std::collections::HashMap;

use chrono::DateTime;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct UserRow {
    id: String,
    username: String,
    created_at: i64,
}

#[derive(FromRow)]
struct LinkRow {
    user_id: String,
    exercise_id: String,
}

impl UserRow {
    fn into_user(self, exercises: Vec<Uuid>) -> DbErrorResult<User> {
        Ok(User {
            id: parse_uuid("user", &self.id)?,
            username: self.username,
            exercises,
            created_at: DateTime::from_timestamp(self.created_at, 0).ok_or_else(|| {
                DbError::decode("user", format!("invalid created_at {}", self.created_at))
            })?,
        })
    }
}

pub(crate) fn parse_uuid(entity: &'static str, raw: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(raw).map_err(|e| DbError::decode(entity, format!("invalid id '{}': {}", raw, e)))
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user. A duplicate username fails with the store's
    /// UNIQUE constraint error.
    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query("INSERT INTO users (id, username, created_at) VALUES (?, ?, ?)")
            .bind(user.id.to_string())
            .bind(&user.username)
            .bind(user.created_at.timestamp())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, created_at FROM users WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let exercise_ids: Vec<String> = sqlx::query_scalar(
            r#"
              SELECT exercise_id
              FROM user_exercises
              WHERE user_id = ?
              ORDER BY position
              "#,
        )
        .bind(id.to_string())
        .fetch_all(&self.pool)
        .await?;

        let exercises = exercise_ids
            .iter()
            .map(|raw| parse_uuid("exercise", raw))
            .collect::<DbErrorResult<Vec<_>>>()?;

        row.into_user(exercises).map(Some)
    }

    /// Every user in creation order, each with its exercise ids in list order.
    pub async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, created_at FROM users ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        let links = sqlx::query_as::<_, LinkRow>(
            r#"
              SELECT user_id, exercise_id
              FROM user_exercises
              ORDER BY user_id, position
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut exercises_by_user: HashMap<String, Vec<Uuid>> = HashMap::new();
        for link in links {
            let exercise_id = parse_uuid("exercise", &link.exercise_id)?;
            exercises_by_user
                .entry(link.user_id)
                .or_default()
                .push(exercise_id);
        }

        rows.into_iter()
            .map(|row| {
                let exercises = exercises_by_user.remove(&row.id).unwrap_or_default();
                row.into_user(exercises)
            })
            .collect()
    }
}
