//! Request body extraction
//!
//! `JsonBody<T>` decodes the raw body as JSON whatever the `Content-Type`
//! header says. Only a body that does not decode into `T` (bad JSON, missing
//! or mistyped fields) is rejected, as a 400 validation error in the
//! standard envelope.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::gateway::services::ServiceError;

#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            ApiError::from(ServiceError::Validation(format!(
                "Failed to read request body: {}",
                e.body_text()
            )))
        })?;
        let value = serde_json::from_slice(&bytes).map_err(|e| {
            ApiError::from(ServiceError::Validation(format!(
                "Invalid request payload: {}",
                e
            )))
        })?;
        Ok(JsonBody(value))
    }
}
