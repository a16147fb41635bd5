//! HTTP error mapping
//!
//! `ApiError` is the single rejection type of every handler. Service errors
//! convert into it with their status and error code.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::response::{ApiResponse, error_codes};
use crate::gateway::services::ServiceError;

#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub msg: String,
}

pub type ApiResult<T> = Result<(StatusCode, Json<T>), ApiError>;

impl ApiError {
    pub fn new(status: StatusCode, code: i32, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
        }
    }

    pub fn method_not_allowed() -> Self {
        Self::new(
            StatusCode::METHOD_NOT_ALLOWED,
            error_codes::METHOD_NOT_ALLOWED,
            "Method not allowed",
        )
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        let (status, code) = match &e {
            ServiceError::Validation(_) => {
                (StatusCode::BAD_REQUEST, error_codes::INVALID_PARAMETER)
            }
            ServiceError::Referential(_) => (
                StatusCode::BAD_REQUEST,
                error_codes::REFERENCED_RECORD_MISSING,
            ),
            ServiceError::NotFound { .. } => (StatusCode::NOT_FOUND, error_codes::RECORD_NOT_FOUND),
            ServiceError::OracleUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                error_codes::SERVICE_UNAVAILABLE,
            ),
        };
        Self::new(status, code, e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ApiResponse::<()>::error(self.code, self.msg));
        (self.status, body).into_response()
    }
}

/// 200 OK with a JSON body
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(data)))
}

/// 201 Created with a JSON body
pub fn created<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::CREATED, Json(data)))
}
