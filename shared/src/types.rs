//! API request and response types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Generic message response for writes that return no resource body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Authentication
// ============================================================================

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Registration response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: Uuid,
}

/// Login request
///
/// The `username` field accepts either a username or an email address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserSummary,
}

/// User identity as embedded in login responses and the client session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

/// Full profile of the authenticated user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Workouts
// ============================================================================

/// A single exercise entry in a create-workout request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseEntryInput {
    pub exercise_name: String,
    pub weight: f64,
    pub reps: i32,
    pub sets: i32,
}

/// Create-workout request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkoutRequest {
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub exercises: Vec<ExerciseEntryInput>,
}

/// Create-workout response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkoutResponse {
    pub message: String,
    pub workout_id: Uuid,
}

/// An exercise entry as returned inside a workout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseEntryResponse {
    pub id: Uuid,
    pub exercise_name: String,
    pub weight: f64,
    pub reps: i32,
    pub sets: i32,
}

/// A workout with its exercise entries embedded
///
/// `notes` is serialized as null when absent, matching the wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutResponse {
    pub id: Uuid,
    pub date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub exercises: Vec<ExerciseEntryResponse>,
}

// ============================================================================
// Leaderboards
// ============================================================================

/// One row of the overall leaderboard (total volume across all exercises)
///
/// `total_volume` is null for users that have registered but logged no
/// exercise entries; such rows sort to the bottom.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallLeaderboardEntry {
    pub username: String,
    pub user_id: Uuid,
    pub total_workouts: i64,
    pub total_volume: Option<f64>,
    pub total_exercises: i64,
}

/// One row of a per-exercise leaderboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseLeaderboardEntry {
    pub username: String,
    pub user_id: Uuid,
    pub max_weight: f64,
    pub max_reps: i32,
    pub max_volume: f64,
}

/// A distinct exercise name with its total entry count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseNameEntry {
    pub exercise_name: String,
    pub count: i64,
}

impl ExerciseEntryInput {
    /// Volume of this entry aggregated over all its sets
    pub fn total_volume(&self) -> f64 {
        self.weight * f64::from(self.reps) * f64::from(self.sets)
    }
}
