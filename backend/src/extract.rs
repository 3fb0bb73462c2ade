//! Request extractors
//!
//! The API contract reports every malformed or incomplete request body as
//! 400, while axum's stock `Json` extractor rejects with 422 on
//! deserialization failures. `ValidatedJson` wraps `Json` and funnels all
//! body rejections through [`ApiError::Validation`].

use crate::error::ApiError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;

/// JSON body extractor whose rejections map to 400 responses
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}
