//! Leaderboard service
//!
//! Shapes the aggregation rows into API responses. All reads, no
//! mutation.

use crate::error::ApiError;
use crate::repositories::LeaderboardRepository;
use sqlx::PgPool;
use workout_tracker_shared::types::{
    ExerciseLeaderboardEntry, ExerciseNameEntry, OverallLeaderboardEntry,
};

/// Leaderboard service
pub struct LeaderboardService;

impl LeaderboardService {
    /// Overall leaderboard ranked by total volume
    pub async fn overall(pool: &PgPool) -> Result<Vec<OverallLeaderboardEntry>, ApiError> {
        let rows = LeaderboardRepository::overall(pool)
            .await
            .map_err(ApiError::Internal)?;

        Ok(rows
            .into_iter()
            .map(|r| OverallLeaderboardEntry {
                username: r.username,
                user_id: r.user_id,
                total_workouts: r.total_workouts,
                total_volume: r.total_volume,
                total_exercises: r.total_exercises,
            })
            .collect())
    }

    /// Per-exercise leaderboard ranked by max weight, then max volume
    pub async fn by_exercise(
        pool: &PgPool,
        exercise_name: &str,
    ) -> Result<Vec<ExerciseLeaderboardEntry>, ApiError> {
        let rows = LeaderboardRepository::by_exercise(pool, exercise_name)
            .await
            .map_err(ApiError::Internal)?;

        Ok(rows
            .into_iter()
            .map(|r| ExerciseLeaderboardEntry {
                username: r.username,
                user_id: r.user_id,
                max_weight: r.max_weight,
                max_reps: r.max_reps,
                max_volume: r.max_volume,
            })
            .collect())
    }

    /// Distinct exercise names with entry counts, most logged first
    pub async fn exercise_names(pool: &PgPool) -> Result<Vec<ExerciseNameEntry>, ApiError> {
        let rows = LeaderboardRepository::exercise_names(pool)
            .await
            .map_err(ApiError::Internal)?;

        Ok(rows
            .into_iter()
            .map(|r| ExerciseNameEntry {
                exercise_name: r.exercise_name,
                count: r.count,
            })
            .collect())
    }
}
