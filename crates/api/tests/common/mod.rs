//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the full production router (middleware included) through
//! `tower::ServiceExt::oneshot`, without an actual TCP listener.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use hackdesk_api::config::ServerConfig;
use hackdesk_api::router::build_app_router;
use hackdesk_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(json)).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(json)).await
}

pub async fn patch(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::PATCH, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Seed a competition, an attendee, and a redeemable through the API so
/// ledger tests have their foreign-key targets in place.
pub async fn seed_ledger_fixtures(pool: &PgPool, quantity: i32) {
    let app = build_test_app(pool.clone());
    let resp = post_json(
        app,
        "/api/v1/competition",
        serde_json::json!({"code": "x", "name": "Competition X"}),
    )
    .await;
    assert_eq!(resp.status(), axum::http::StatusCode::CREATED);

    let app = build_test_app(pool.clone());
    let resp = post_json(
        app,
        "/api/v1/attendee",
        serde_json::json!({"id": "u1", "competition_code": "x", "display_name": "Sam"}),
    )
    .await;
    assert_eq!(resp.status(), axum::http::StatusCode::CREATED);

    let app = build_test_app(pool.clone());
    let resp = post_json(
        app,
        "/api/v1/redeemable",
        serde_json::json!({
            "competition_code": "x",
            "name": "tshirt",
            "quantity": quantity,
            "description": "Event shirt"
        }),
    )
    .await;
    assert_eq!(resp.status(), axum::http::StatusCode::CREATED);
}
