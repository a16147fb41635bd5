//! OpenAPI / Swagger UI Documentation
//!
//! Each registry serves its own document:
//!
//! - Swagger UI: `http://<host>:<port>/docs`
//! - OpenAPI JSON: `http://<host>:<port>/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::models::{NewOrder, NewUser, Order, User};

/// User registry API documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Registry API",
        version = "1.0.0",
        description = "In-memory user registry with store-assigned identities."
    ),
    servers(
        (url = "http://localhost:8081", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::user_health,
        crate::gateway::handlers::user::list_users,
        crate::gateway::handlers::user::create_user,
        crate::gateway::handlers::user::get_user,
    ),
    components(schemas(HealthResponse, User, NewUser)),
    tags(
        (name = "System", description = "Service health"),
        (name = "Users", description = "User registry"),
    )
)]
pub struct UserApiDoc;

/// Order registry API documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Registry API",
        version = "1.0.0",
        description = "In-memory order registry. Orders reference users, checked at creation time."
    ),
    servers(
        (url = "http://localhost:8082", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::order_health,
        crate::gateway::handlers::order::list_orders,
        crate::gateway::handlers::order::create_order,
        crate::gateway::handlers::order::get_order,
        crate::gateway::handlers::order::list_user_orders,
    ),
    components(schemas(HealthResponse, Order, NewOrder)),
    tags(
        (name = "System", description = "Service health"),
        (name = "Orders", description = "Order registry"),
    )
)]
pub struct OrderApiDoc;
