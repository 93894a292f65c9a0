//! Validating JSON extractor
//!
//! `ValidatedJson<T>` reads the body as JSON and then runs `validator::Validate`.
//! The content type is not checked. An empty body reads as `{}` so missing
//! fields surface as field errors. Every failure is an [`AppError`] with status 400.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::app_error::AppError;

/// JSON body that has passed field validation
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

        let value: T = if bytes.iter().all(u8::is_ascii_whitespace) {
            serde_json::from_slice(b"{}")
        } else {
            serde_json::from_slice(&bytes)
        }
        .map_err(|e| AppError::bad_request(format!("Malformed JSON body: {}", e)))?;

        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
