//! HTTP surfaces of the two registries
//!
//! ```text
//! user registry                      order registry
//!   GET  /users                        GET  /orders
//!   POST /users                        POST /orders ──▶ ExistenceOracle
//!   GET  /users/{id}                   GET  /orders/{id}
//!                                      GET  /orders/user/{user_id}
//!   GET  /health                       GET  /health
//!   GET  /docs                         GET  /docs
//! ```
//!
//! Unsupported methods on a known path answer 405 in the error envelope.

pub mod handlers;
pub mod openapi;
pub mod services;
pub mod state;
pub mod types;

use std::future::Future;
use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

// OpenAPI / Swagger UI
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::OracleConfig;
use crate::models::User;
use crate::oracle::StoreOracle;
use crate::store::RecordStore;
use state::{OrderState, UserState};

const DOCS_PATH: &str = "/docs";
const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Build the user registry router
pub fn user_router(state: Arc<UserState>) -> Router {
    Router::new()
        .route("/health", get(handlers::user_health))
        .route(
            "/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route("/users/{id}", get(handlers::get_user))
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(state)
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_JSON_PATH, openapi::UserApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}

/// Build the order registry router
pub fn order_router(state: Arc<OrderState>) -> Router {
    Router::new()
        .route("/health", get(handlers::order_health))
        .route(
            "/orders",
            get(handlers::list_orders).post(handlers::create_order),
        )
        .route("/orders/{id}", get(handlers::get_order))
        .route("/orders/user/{user_id}", get(handlers::list_user_orders))
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(state)
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_JSON_PATH, openapi::OrderApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}

/// Both registries in one process: the order registry checks users
/// directly against the shared user store.
pub fn local_routers(oracle_config: &OracleConfig) -> (Router, Router) {
    let users: Arc<RecordStore<User>> = Arc::new(RecordStore::new());
    let oracle = Arc::new(StoreOracle::new(users.clone()));

    let user_state = Arc::new(UserState::new(users));
    let order_state = Arc::new(OrderState::new(
        Arc::new(RecordStore::new()),
        oracle,
        oracle_config,
    ));

    (user_router(user_state), order_router(order_state))
}

/// Bind `addr` and serve `app` until `shutdown` resolves.
pub async fn serve<F>(name: &str, addr: &str, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        anyhow::anyhow!(
            "Failed to bind {} registry to {}: {} (port may already be in use)",
            name,
            addr,
            e
        )
    })?;

    tracing::info!("{} registry listening on http://{}", name, addr);
    tracing::info!("{} registry API docs: http://{}{}", name, addr, DOCS_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("{} registry stopped", name);
    Ok(())
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
