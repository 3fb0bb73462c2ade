//! Workout and exercise-entry repository for database operations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Workout record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Exercise entry record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExerciseEntryRecord {
    pub id: Uuid,
    pub workout_id: Uuid,
    pub exercise_name: String,
    pub weight: f64,
    pub reps: i32,
    pub sets: i32,
}

/// Input for one exercise entry of a new workout
#[derive(Debug, Clone)]
pub struct NewExerciseEntry {
    pub exercise_name: String,
    pub weight: f64,
    pub reps: i32,
    pub sets: i32,
}

/// Workout repository
pub struct WorkoutRepository;

impl WorkoutRepository {
    /// List a user's workouts, most recent date first
    pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<WorkoutRecord>> {
        let records = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            SELECT id, user_id, date, notes, created_at
            FROM workouts
            WHERE user_id = $1
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Fetch the exercise entries of a set of workouts in one query
    pub async fn entries_for_workouts(
        pool: &PgPool,
        workout_ids: &[Uuid],
    ) -> Result<Vec<ExerciseEntryRecord>> {
        let records = sqlx::query_as::<_, ExerciseEntryRecord>(
            r#"
            SELECT id, workout_id, exercise_name, weight, reps, sets
            FROM exercises
            WHERE workout_id = ANY($1)
            "#,
        )
        .bind(workout_ids)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Create a workout with its exercise entries
    ///
    /// The parent row and all child rows are inserted in one transaction:
    /// a failure on any entry rolls the workout insert back, so no
    /// orphaned workout can exist.
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
        notes: Option<&str>,
        entries: &[NewExerciseEntry],
    ) -> Result<Uuid> {
        let mut tx = pool.begin().await?;

        let workout_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO workouts (user_id, date, notes)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(date)
        .bind(notes)
        .fetch_one(&mut *tx)
        .await?;

        for entry in entries {
            sqlx::query(
                r#"
                INSERT INTO exercises (workout_id, exercise_name, weight, reps, sets)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(workout_id)
            .bind(&entry.exercise_name)
            .bind(entry.weight)
            .bind(entry.reps)
            .bind(entry.sets)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(workout_id)
    }

    /// Delete a workout owned by `user_id`
    ///
    /// The statement is owner-scoped, so a workout belonging to someone
    /// else produces the same zero-rows result as one that does not
    /// exist. Entries are removed by the cascade.
    pub async fn delete(pool: &PgPool, user_id: Uuid, workout_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM workouts WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(workout_id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    // Covered by the DB-gated integration tests under backend/tests/.
}
