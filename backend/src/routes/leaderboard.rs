//! Leaderboard routes
//!
//! Public read-only rankings; no authentication required.

use crate::error::ApiResult;
use crate::services::LeaderboardService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use workout_tracker_shared::types::{
    ExerciseLeaderboardEntry, ExerciseNameEntry, OverallLeaderboardEntry,
};

/// Create leaderboard routes
///
/// `/exercises/list` must be registered alongside `/:exercise_name`;
/// the static two-segment path wins over the single-segment capture.
pub fn leaderboard_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(overall))
        .route("/exercises/list", get(exercise_names))
        .route("/:exercise_name", get(by_exercise))
}

/// GET /api/leaderboard - overall ranking by total volume
async fn overall(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<OverallLeaderboardEntry>>> {
    let entries = LeaderboardService::overall(&state.db).await?;
    Ok(Json(entries))
}

/// GET /api/leaderboard/:exercise_name - ranking for one exercise
async fn by_exercise(
    State(state): State<AppState>,
    Path(exercise_name): Path<String>,
) -> ApiResult<Json<Vec<ExerciseLeaderboardEntry>>> {
    let entries = LeaderboardService::by_exercise(&state.db, &exercise_name).await?;
    Ok(Json(entries))
}

/// GET /api/leaderboard/exercises/list - exercise names for pickers
async fn exercise_names(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ExerciseNameEntry>>> {
    let entries = LeaderboardService::exercise_names(&state.db).await?;
    Ok(Json(entries))
}
