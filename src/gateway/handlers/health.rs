//! Health check handlers

use std::sync::Arc;

use axum::{Json, extract::State};
use utoipa::ToSchema;

use super::super::state::{OrderState, UserState};
use super::super::types::ApiResponse;
use super::helpers::now_ms;

/// Health check response data
#[derive(Debug, serde::Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "users")]
    pub service: String,
    /// Records currently held
    #[schema(example = 3)]
    pub records: usize,
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
}

fn health(service: &str, records: usize) -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse {
        service: service.to_string(),
        records,
        timestamp_ms: now_ms(),
    }))
}

/// User registry health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse, content_type = "application/json")
    ),
    tag = "System"
)]
pub async fn user_health(State(state): State<Arc<UserState>>) -> Json<ApiResponse<HealthResponse>> {
    health("users", state.users.len())
}

/// Order registry health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse, content_type = "application/json")
    ),
    tag = "System"
)]
pub async fn order_health(
    State(state): State<Arc<OrderState>>,
) -> Json<ApiResponse<HealthResponse>> {
    health("orders", state.orders.len())
}
