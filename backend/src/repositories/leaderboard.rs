//! Leaderboard aggregation queries
//!
//! Read-only rankings over the workout store. Every query caps its result
//! at the top 100 rows.

use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// Rows returned per leaderboard
const LEADERBOARD_LIMIT: i64 = 100;

/// One user's totals on the overall leaderboard
///
/// `total_volume` is NULL for users without any exercise entries (they
/// are produced by the outer joins below).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OverallRow {
    pub user_id: Uuid,
    pub username: String,
    pub total_workouts: i64,
    pub total_volume: Option<f64>,
    pub total_exercises: i64,
}

/// One user's maxima for a single exercise
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExerciseRow {
    pub user_id: Uuid,
    pub username: String,
    pub max_weight: f64,
    pub max_reps: i32,
    pub max_volume: f64,
}

/// A distinct exercise name with its entry count across all users
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExerciseNameRow {
    pub exercise_name: String,
    pub count: i64,
}

/// Leaderboard repository
pub struct LeaderboardRepository;

impl LeaderboardRepository {
    /// Overall leaderboard: total volume across all exercises per user
    ///
    /// Volume aggregates as weight * reps * sets. `NULLS LAST` keeps
    /// users with no entries at the bottom; PostgreSQL would otherwise
    /// sort NULL first under DESC.
    pub async fn overall(pool: &PgPool) -> Result<Vec<OverallRow>> {
        let rows = sqlx::query_as::<_, OverallRow>(
            r#"
            SELECT
                u.id AS user_id,
                u.username,
                COUNT(DISTINCT w.id) AS total_workouts,
                SUM(e.weight * e.reps * e.sets) AS total_volume,
                COUNT(e.id) AS total_exercises
            FROM users u
            LEFT JOIN workouts w ON w.user_id = u.id
            LEFT JOIN exercises e ON e.workout_id = w.id
            GROUP BY u.id, u.username
            ORDER BY total_volume DESC NULLS LAST
            LIMIT $1
            "#,
        )
        .bind(LEADERBOARD_LIMIT)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Per-exercise leaderboard, case-insensitive exact name match
    ///
    /// `max_weight` and `max_reps` are independent maxima; `max_volume`
    /// is the maximum per-entry weight * reps. Primary order is
    /// max_weight, ties broken by max_volume; further ties keep
    /// implementation-defined order.
    pub async fn by_exercise(pool: &PgPool, exercise_name: &str) -> Result<Vec<ExerciseRow>> {
        let rows = sqlx::query_as::<_, ExerciseRow>(
            r#"
            SELECT
                u.id AS user_id,
                u.username,
                MAX(e.weight) AS max_weight,
                MAX(e.reps) AS max_reps,
                MAX(e.weight * e.reps) AS max_volume
            FROM exercises e
            JOIN workouts w ON e.workout_id = w.id
            JOIN users u ON w.user_id = u.id
            WHERE LOWER(e.exercise_name) = LOWER($1)
            GROUP BY u.id, u.username
            ORDER BY max_weight DESC, max_volume DESC
            LIMIT $2
            "#,
        )
        .bind(exercise_name)
        .bind(LEADERBOARD_LIMIT)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Every distinct exercise name with its total entry count
    ///
    /// Grouping is by exact name; only the per-exercise ranking above
    /// folds case.
    pub async fn exercise_names(pool: &PgPool) -> Result<Vec<ExerciseNameRow>> {
        let rows = sqlx::query_as::<_, ExerciseNameRow>(
            r#"
            SELECT exercise_name, COUNT(*) AS count
            FROM exercises
            GROUP BY exercise_name
            ORDER BY count DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}
