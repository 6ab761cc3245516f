use crate::repositories::user_repository::parse_uuid;
use crate::{DbError, Result as DbErrorResult};

use et_core::{Exercise, LogFilter, date::ISO_FORMAT};

use chrono::{DateTime, NaiveDate};
use sqlx::{Executor, FromRow, Sqlite, SqlitePool};
use uuid::Uuid;

#[derive(FromRow)]
struct ExerciseRow {
    id: String,
    description: Option<String>,
    duration: Option<i64>,
    date: String,
    created_at: i64,
}

impl TryFrom<ExerciseRow> for Exercise {
    type Error = DbError;

    fn try_from(row: ExerciseRow) -> DbErrorResult<Self> {
        Ok(Exercise {
            id: parse_uuid("exercise", &row.id)?,
            description: row.description,
            duration: row.duration,
            date: NaiveDate::parse_from_str(&row.date, ISO_FORMAT).map_err(|e| {
                DbError::decode("exercise", format!("invalid date '{}': {}", row.date, e))
            })?,
            created_at: DateTime::from_timestamp(row.created_at, 0).ok_or_else(|| {
                DbError::decode("exercise", format!("invalid created_at {}", row.created_at))
            })?,
        })
    }
}

pub struct ExerciseRepository {
    pool: SqlitePool,
}

impl ExerciseRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the exercise and append it to the user's list in one
    /// transaction. Either both rows exist afterwards or neither does.
    pub async fn log_for_user(&self, user_id: Uuid, exercise: &Exercise) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;
        Self::insert(&mut *tx, exercise).await?;
        Self::append_to_user(&mut *tx, user_id, exercise.id).await?;
        tx.commit().await?;

        Ok(())
    }

    /// Insert an unlinked exercise record.
    pub async fn insert<'e, E>(executor: E, exercise: &Exercise) -> DbErrorResult<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query(
            r#"
              INSERT INTO exercises (id, description, duration, date, created_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(exercise.id.to_string())
        .bind(&exercise.description)
        .bind(exercise.duration)
        .bind(exercise.date.format(ISO_FORMAT).to_string())
        .bind(exercise.created_at.timestamp())
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Link an exercise to the end of a user's list.
    pub async fn append_to_user<'e, E>(
        executor: E,
        user_id: Uuid,
        exercise_id: Uuid,
    ) -> DbErrorResult<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let user_id = user_id.to_string();

        sqlx::query(
            r#"
              INSERT INTO user_exercises (user_id, exercise_id, position)
              SELECT ?, ?, COALESCE(MAX(position), -1) + 1
              FROM user_exercises
              WHERE user_id = ?
              "#,
        )
        .bind(&user_id)
        .bind(exercise_id.to_string())
        .bind(&user_id)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// The user's exercises in list order, restricted to the filter's date
    /// range and capped at its limit.
    pub async fn find_log(&self, user_id: Uuid, filter: &LogFilter) -> DbErrorResult<Vec<Exercise>> {
        let from = filter.from.map(|d| d.format(ISO_FORMAT).to_string());
        let to = filter.to.map(|d| d.format(ISO_FORMAT).to_string());

        let rows = sqlx::query_as::<_, ExerciseRow>(
            r#"
              SELECT e.id, e.description, e.duration, e.date, e.created_at
              FROM user_exercises ue
              INNER JOIN exercises e ON e.id = ue.exercise_id
              WHERE ue.user_id = ?
                AND (? IS NULL OR e.date >= ?)
                AND (? IS NULL OR e.date <= ?)
              ORDER BY ue.position
              LIMIT ?
              "#,
        )
        .bind(user_id.to_string())
        .bind(&from)
        .bind(&from)
        .bind(&to)
        .bind(&to)
        .bind(filter.sql_limit())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Exercise::try_from).collect()
    }
}
