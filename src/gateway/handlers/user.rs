//! User registry handlers (list, create, get)

use std::sync::Arc;

use axum::extract::{Path, State};

use crate::gateway::services::parse_record_id;
use crate::models::{NewUser, User};

use super::super::state::UserState;
use super::super::types::{ApiResult, JsonBody, created, ok};

/// List all users
///
/// GET /users
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users, in no particular order", body = [User])
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<Arc<UserState>>) -> ApiResult<Vec<User>> {
    ok(state.service().list())
}

/// Register a user
///
/// POST /users
#[utoipa::path(
    post,
    path = "/users",
    request_body(content = NewUser, description = "User to register; any `id` field is ignored", content_type = "application/json"),
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Malformed request body")
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<Arc<UserState>>,
    JsonBody(draft): JsonBody<NewUser>,
) -> ApiResult<User> {
    created(state.service().create(draft))
}

/// Get a user by id
///
/// GET /users/{id}
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User ID (non-negative integer)")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "ID is not an integer"),
        (status = 404, description = "No such user")
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<Arc<UserState>>,
    Path(raw_id): Path<String>,
) -> ApiResult<User> {
    let id = parse_record_id(&raw_id, "user ID")?;
    ok(state.service().get(id)?)
}
