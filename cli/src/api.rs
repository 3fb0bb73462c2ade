//! HTTP client for the Workout Tracker API
//!
//! Thin typed wrapper over reqwest. Server-reported error envelopes are
//! decoded into [`ApiClientError::Api`] so callers can surface the
//! message; anything else falls back to a generic message.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use uuid::Uuid;
use workout_tracker_shared::types::{
    CreateWorkoutRequest, CreateWorkoutResponse, ErrorResponse, ExerciseLeaderboardEntry,
    ExerciseNameEntry, LoginRequest, LoginResponse, MessageResponse, OverallLeaderboardEntry,
    RegisterRequest, RegisterResponse, UserProfile, WorkoutResponse,
};

/// Errors surfaced by the API client
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// The server answered with an error status
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// The request never produced a usable response
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type alias for API client calls
pub type ApiClientResult<T> = Result<T, ApiClientError>;

/// Typed client for the Workout Tracker REST API
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client against `base_url` (no trailing slash required)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            token: None,
        }
    }

    /// Attach a bearer token for authenticated endpoints
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Register a new account
    pub async fn register(&self, req: &RegisterRequest) -> ApiClientResult<RegisterResponse> {
        let response = self
            .request(reqwest::Method::POST, "/api/auth/register")
            .json(req)
            .send()
            .await?;
        decode(response).await
    }

    /// Log in with username or email
    pub async fn login(&self, req: &LoginRequest) -> ApiClientResult<LoginResponse> {
        let response = self
            .request(reqwest::Method::POST, "/api/auth/login")
            .json(req)
            .send()
            .await?;
        decode(response).await
    }

    /// Fetch the authenticated user's profile
    pub async fn me(&self) -> ApiClientResult<UserProfile> {
        let response = self
            .request(reqwest::Method::GET, "/api/auth/me")
            .send()
            .await?;
        decode(response).await
    }

    /// List the authenticated user's workouts
    pub async fn list_workouts(&self) -> ApiClientResult<Vec<WorkoutResponse>> {
        let response = self
            .request(reqwest::Method::GET, "/api/workouts")
            .send()
            .await?;
        decode(response).await
    }

    /// Create a workout
    pub async fn create_workout(
        &self,
        req: &CreateWorkoutRequest,
    ) -> ApiClientResult<CreateWorkoutResponse> {
        let response = self
            .request(reqwest::Method::POST, "/api/workouts")
            .json(req)
            .send()
            .await?;
        decode(response).await
    }

    /// Delete a workout by id
    pub async fn delete_workout(&self, id: Uuid) -> ApiClientResult<MessageResponse> {
        let response = self
            .request(reqwest::Method::DELETE, &format!("/api/workouts/{}", id))
            .send()
            .await?;
        decode(response).await
    }

    /// Overall leaderboard
    pub async fn leaderboard(&self) -> ApiClientResult<Vec<OverallLeaderboardEntry>> {
        let response = self
            .request(reqwest::Method::GET, "/api/leaderboard")
            .send()
            .await?;
        decode(response).await
    }

    /// Per-exercise leaderboard
    pub async fn leaderboard_for(
        &self,
        exercise_name: &str,
    ) -> ApiClientResult<Vec<ExerciseLeaderboardEntry>> {
        let path = format!("/api/leaderboard/{}", urlencoding::encode(exercise_name));
        let response = self.request(reqwest::Method::GET, &path).send().await?;
        decode(response).await
    }

    /// Distinct exercise names with entry counts
    pub async fn exercise_names(&self) -> ApiClientResult<Vec<ExerciseNameEntry>> {
        let response = self
            .request(reqwest::Method::GET, "/api/leaderboard/exercises/list")
            .send()
            .await?;
        decode(response).await
    }
}

/// Decode a success body, or turn an error status into `ApiClientError::Api`
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiClientResult<T> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json::<T>().await?)
    } else {
        let message = match response.json::<ErrorResponse>().await {
            Ok(envelope) => envelope.error.message,
            Err(_) => "The server reported an error".to_string(),
        };
        Err(ApiClientError::Api { status, message })
    }
}
