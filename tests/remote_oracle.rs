//! The order registry talking to a separately served user registry over HTTP.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::{Router, http::StatusCode, routing::get};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use registry_services::config::OracleConfig;
use registry_services::gateway::{
    self,
    state::{OrderState, UserState},
};
use registry_services::oracle::{ExistenceOracle, HttpUserOracle, OracleError};
use registry_services::store::RecordStore;

/// Serve `app` on an ephemeral loopback port and return its base URL.
async fn spawn_app(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A fake user registry answering every lookup with `status` after `delay`.
async fn spawn_stub(status: StatusCode, delay: Duration) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let app = Router::new().route(
        "/users/{id}",
        get(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(delay).await;
                status
            }
        }),
    );
    (spawn_app(app).await, hits)
}

fn test_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

async fn spawn_user_registry() -> String {
    let state = Arc::new(UserState::new(Arc::new(RecordStore::new())));
    spawn_app(gateway::user_router(state)).await
}

#[tokio::test]
async fn test_http_oracle_against_user_registry() {
    let users_url = spawn_user_registry().await;
    let client = test_client();

    let resp = client
        .post(format!("{}/users", users_url))
        .json(&json!({"name": "Ana"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);

    let oracle = HttpUserOracle::new(users_url, Duration::from_secs(2), true).unwrap();
    assert!(oracle.exists(1).await.unwrap());
    assert!(!oracle.exists(2).await.unwrap());
}

#[tokio::test]
async fn test_two_service_deployment() {
    let users_url = spawn_user_registry().await;

    let config = OracleConfig {
        user_service_url: users_url.clone(),
        ..OracleConfig::default()
    };
    let oracle =
        HttpUserOracle::new(config.user_service_url.clone(), config.attempt_timeout(), true).unwrap();
    let state = Arc::new(OrderState::new(
        Arc::new(RecordStore::new()),
        Arc::new(oracle),
        &config,
    ));
    let orders_url = spawn_app(gateway::order_router(state)).await;
    let client = test_client();

    client
        .post(format!("{}/users", users_url))
        .json(&json!({"name": "Ana"}))
        .send()
        .await
        .unwrap();

    let resp = client
        .post(format!("{}/orders", orders_url))
        .json(&json!({"user_id": 1, "product_name": "Pen"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
    let order: Value = resp.json().await.unwrap();
    assert_eq!(order, json!({"id": 1, "user_id": 1, "product_name": "Pen"}));

    let resp = client
        .post(format!("{}/orders", orders_url))
        .json(&json!({"user_id": 999, "product_name": "Pen"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

    let listed: Value = client
        .get(format!("{}/orders/user/1", orders_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed, json!([{"id": 1, "user_id": 1, "product_name": "Pen"}]));
}

#[tokio::test]
async fn test_unexpected_status_is_unavailable_without_retry() {
    let (url, hits) = spawn_stub(StatusCode::INTERNAL_SERVER_ERROR, Duration::ZERO).await;
    let oracle = HttpUserOracle::new(url, Duration::from_secs(2), true).unwrap();

    let result = oracle.exists(1).await;
    assert!(matches!(result, Err(OracleError::Unavailable(_))));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_foreign_404_is_unavailable_not_absent() {
    // Something that is not a user registry answers every path with a bare 404.
    let (url, hits) = spawn_stub(StatusCode::NOT_FOUND, Duration::ZERO).await;
    let oracle = HttpUserOracle::new(url, Duration::from_secs(2), true).unwrap();

    let result = oracle.exists(1).await;
    assert!(matches!(result, Err(OracleError::Unavailable(_))));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_misconfigured_user_url_fails_closed() {
    // Points at an order registry, which has no /users/{id} route.
    let unused_oracle =
        HttpUserOracle::new("http://127.0.0.1:1", Duration::from_millis(100), false).unwrap();
    let decoy = Arc::new(OrderState::new(
        Arc::new(RecordStore::new()),
        Arc::new(unused_oracle),
        &OracleConfig::default(),
    ));
    let decoy_url = spawn_app(gateway::order_router(decoy)).await;

    let config = OracleConfig {
        user_service_url: decoy_url,
        ..OracleConfig::default()
    };
    let oracle =
        HttpUserOracle::new(config.user_service_url.clone(), config.attempt_timeout(), true).unwrap();
    let state = Arc::new(OrderState::new(
        Arc::new(RecordStore::new()),
        Arc::new(oracle),
        &config,
    ));
    let orders_url = spawn_app(gateway::order_router(state)).await;

    let resp = test_client()
        .post(format!("{}/orders", orders_url))
        .json(&json!({"user_id": 1, "product_name": "Pen"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["code"], 5001);
}

#[tokio::test]
async fn test_timeout_is_retried_once() {
    let (url, hits) = spawn_stub(StatusCode::OK, Duration::from_secs(2)).await;
    let oracle = HttpUserOracle::new(url, Duration::from_millis(200), true).unwrap();

    let result = oracle.exists(1).await;
    assert!(matches!(result, Err(OracleError::Unavailable(_))));
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_timeout_without_retry() {
    let (url, hits) = spawn_stub(StatusCode::OK, Duration::from_secs(2)).await;
    let oracle = HttpUserOracle::new(url, Duration::from_millis(200), false).unwrap();

    let result = oracle.exists(1).await;
    assert!(matches!(result, Err(OracleError::Unavailable(_))));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}
