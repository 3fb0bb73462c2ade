//! Workout service
//!
//! Validates create requests, threads the authenticated owner into every
//! store call, and assembles workouts with their embedded entries.

use crate::error::ApiError;
use crate::repositories::{NewExerciseEntry, WorkoutRepository};
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;
use workout_tracker_shared::types::{
    CreateWorkoutRequest, ExerciseEntryResponse, WorkoutResponse,
};
use workout_tracker_shared::validation::validate_exercise_entry;

/// Workout service for business logic
pub struct WorkoutService;

impl WorkoutService {
    /// List the user's workouts with exercise entries embedded,
    /// ordered by date descending
    pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<WorkoutResponse>, ApiError> {
        let workouts = WorkoutRepository::list_for_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        let ids: Vec<Uuid> = workouts.iter().map(|w| w.id).collect();
        let entries = WorkoutRepository::entries_for_workouts(pool, &ids)
            .await
            .map_err(ApiError::Internal)?;

        let mut by_workout: HashMap<Uuid, Vec<ExerciseEntryResponse>> = HashMap::new();
        for entry in entries {
            by_workout
                .entry(entry.workout_id)
                .or_default()
                .push(ExerciseEntryResponse {
                    id: entry.id,
                    exercise_name: entry.exercise_name,
                    weight: entry.weight,
                    reps: entry.reps,
                    sets: entry.sets,
                });
        }

        Ok(workouts
            .into_iter()
            .map(|w| WorkoutResponse {
                exercises: by_workout.remove(&w.id).unwrap_or_default(),
                id: w.id,
                date: w.date,
                notes: w.notes,
                created_at: w.created_at,
            })
            .collect())
    }

    /// Create a workout for the user
    ///
    /// Fails with `Validation` when the exercise list is empty or any
    /// entry is invalid; nothing is persisted in that case. The insert
    /// itself is atomic across the workout row and all entry rows.
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        req: CreateWorkoutRequest,
    ) -> Result<Uuid, ApiError> {
        if req.exercises.is_empty() {
            return Err(ApiError::Validation(
                "Date and at least one exercise are required".to_string(),
            ));
        }

        for entry in &req.exercises {
            validate_exercise_entry(entry).map_err(ApiError::Validation)?;
        }

        let entries: Vec<NewExerciseEntry> = req
            .exercises
            .into_iter()
            .map(|e| NewExerciseEntry {
                exercise_name: e.exercise_name,
                weight: e.weight,
                reps: e.reps,
                sets: e.sets,
            })
            .collect();

        let workout_id =
            WorkoutRepository::create(pool, user_id, req.date, req.notes.as_deref(), &entries)
                .await
                .map_err(ApiError::Internal)?;

        Ok(workout_id)
    }

    /// Delete the user's workout
    ///
    /// A workout that does not exist and one owned by another user are
    /// reported identically as `NotFound`.
    pub async fn delete(pool: &PgPool, user_id: Uuid, workout_id: Uuid) -> Result<(), ApiError> {
        let deleted = WorkoutRepository::delete(pool, user_id, workout_id)
            .await
            .map_err(ApiError::Internal)?;

        if !deleted {
            return Err(ApiError::NotFound("Workout not found".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Covered by the DB-gated integration tests under backend/tests/.
}
