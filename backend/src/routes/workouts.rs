//! Workout routes
//!
//! All endpoints require a bearer token; the acting user is taken from
//! the token, never from the request body.

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::extract::ValidatedJson;
use crate::services::WorkoutService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use uuid::Uuid;
use workout_tracker_shared::types::{
    CreateWorkoutRequest, CreateWorkoutResponse, MessageResponse, WorkoutResponse,
};

/// Create workout routes
pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_workouts).post(create_workout))
        .route("/:id", delete(delete_workout))
}

/// GET /api/workouts - the user's workouts with entries embedded
async fn list_workouts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<WorkoutResponse>>> {
    let workouts = WorkoutService::list(&state.db, auth.user_id).await?;
    Ok(Json(workouts))
}

/// POST /api/workouts - create a workout with its exercise entries
async fn create_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateWorkoutRequest>,
) -> ApiResult<(StatusCode, Json<CreateWorkoutResponse>)> {
    let workout_id = WorkoutService::create(&state.db, auth.user_id, req).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateWorkoutResponse {
            message: "Workout created successfully".to_string(),
            workout_id,
        }),
    ))
}

/// DELETE /api/workouts/:id - delete one of the user's workouts
async fn delete_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let workout_id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::Validation("Invalid workout ID".to_string()))?;

    WorkoutService::delete(&state.db, auth.user_id, workout_id).await?;

    Ok(Json(MessageResponse {
        message: "Workout deleted successfully".to_string(),
    }))
}
