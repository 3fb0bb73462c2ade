//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the API layer.

pub mod leaderboard;
pub mod user;
pub mod workout;

pub use leaderboard::LeaderboardService;
pub use user::UserService;
pub use workout::WorkoutService;
