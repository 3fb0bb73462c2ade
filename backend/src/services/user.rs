//! User service for registration, login, and profile reads
//!
//! Password hashing/verification is offloaded to the blocking thread
//! pool; token issuance uses the pre-computed keys from AppState.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{UserRecord, UserRepository};
use sqlx::PgPool;
use uuid::Uuid;
use validator::ValidateEmail;
use workout_tracker_shared::types::{UserProfile, UserSummary};
use workout_tracker_shared::validation::{validate_password, validate_username};

/// User service for identity operations
pub struct UserService;

impl UserService {
    /// Register a new user
    ///
    /// Fails with `Conflict` when the username or email is already taken.
    pub async fn register(
        pool: &PgPool,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<UserRecord, ApiError> {
        validate_username(username).map_err(ApiError::Validation)?;

        if !email.validate_email() {
            return Err(ApiError::Validation("Invalid email format".to_string()));
        }

        validate_password(password).map_err(ApiError::Validation)?;

        if UserRepository::username_exists(pool, username)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict("Username already taken".to_string()));
        }

        if UserRepository::email_exists(pool, email)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict("Email already registered".to_string()));
        }

        let password_owned = password.to_string();
        let password_hash = PasswordService::hash_async(password_owned)
            .await
            .map_err(ApiError::Internal)?;

        let user = UserRepository::create(pool, username, email, &password_hash)
            .await
            .map_err(ApiError::Internal)?;

        Ok(user)
    }

    /// Login with username or email
    ///
    /// Returns the session token and a user summary. A missing user and a
    /// wrong password are indistinguishable to the caller.
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        login: &str,
        password: &str,
    ) -> Result<(String, UserSummary), ApiError> {
        let user = UserRepository::find_by_username_or_email(pool, login)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

        let password_owned = password.to_string();
        let hash_owned = user.password_hash.clone();
        let valid = PasswordService::verify_async(password_owned, hash_owned)
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
        }

        let token = jwt_service
            .generate_token(user.id, &user.username)
            .map_err(ApiError::Internal)?;

        Ok((
            token,
            UserSummary {
                id: user.id,
                username: user.username,
                email: user.email,
            },
        ))
    }

    /// Get the profile of the authenticated user
    pub async fn get_profile(pool: &PgPool, user_id: Uuid) -> Result<UserProfile, ApiError> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(UserProfile {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        })
    }
}
