//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod leaderboard;
pub mod user;
pub mod workout;

pub use leaderboard::{ExerciseNameRow, ExerciseRow, LeaderboardRepository, OverallRow};
pub use user::{UserRecord, UserRepository};
pub use workout::{ExerciseEntryRecord, NewExerciseEntry, WorkoutRecord, WorkoutRepository};
