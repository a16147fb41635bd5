//! Order registry handlers (list, create, get, list by user)

use std::sync::Arc;

use axum::extract::{Path, State};

use crate::gateway::services::parse_record_id;
use crate::models::{NewOrder, Order};

use super::super::state::OrderState;
use super::super::types::{ApiResult, JsonBody, created, ok};

/// List all orders
///
/// GET /orders
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All orders, in no particular order", body = [Order])
    ),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<Arc<OrderState>>) -> ApiResult<Vec<Order>> {
    ok(state.service().list())
}

/// Place an order
///
/// POST /orders
///
/// The referenced user is checked before anything is stored.
#[utoipa::path(
    post,
    path = "/orders",
    request_body(content = NewOrder, description = "Order to place; any `id` field is ignored", content_type = "application/json"),
    responses(
        (status = 201, description = "Order created", body = Order),
        (status = 400, description = "Malformed body, or the referenced user does not exist"),
        (status = 503, description = "User existence could not be verified")
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<OrderState>>,
    JsonBody(draft): JsonBody<NewOrder>,
) -> ApiResult<Order> {
    let order = state.service().create(draft).await?;
    created(order)
}

/// Get an order by id
///
/// GET /orders/{id}
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(("id" = String, Path, description = "Order ID (non-negative integer)")),
    responses(
        (status = 200, description = "Order found", body = Order),
        (status = 400, description = "ID is not an integer"),
        (status = 404, description = "No such order")
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<Arc<OrderState>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Order> {
    let id = parse_record_id(&raw_id, "order ID")?;
    ok(state.service().get(id)?)
}

/// List the orders of one user
///
/// GET /orders/user/{user_id}
#[utoipa::path(
    get,
    path = "/orders/user/{user_id}",
    params(("user_id" = String, Path, description = "User ID (non-negative integer)")),
    responses(
        (status = 200, description = "Orders of the user, possibly empty", body = [Order]),
        (status = 400, description = "User ID is not an integer")
    ),
    tag = "Orders"
)]
pub async fn list_user_orders(
    State(state): State<Arc<OrderState>>,
    Path(raw_user_id): Path<String>,
) -> ApiResult<Vec<Order>> {
    let user_id = parse_record_id(&raw_user_id, "user ID")?;
    ok(state.service().by_user(user_id))
}
