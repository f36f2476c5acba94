//! Integration tests for adaptive-ide
//!
//! Router tests drive the axum app in-process with `tower::ServiceExt::oneshot`,
//! so no port is bound.

use std::sync::Arc;

use adaptive_ide::{Config, Runner};
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

mod api_routes;
mod config_loading;
mod grading;
mod live_trace;

const FIXTURES_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

/// Path of a config fixture
pub(crate) fn config_fixture(name: &str) -> String {
    format!("{FIXTURES_PATH}/configs/{name}")
}

/// Load a config fixture, panicking with the error if it fails
pub(crate) fn load_fixture(name: &str) -> Config {
    let path = config_fixture(name);
    Config::from_file(&path).unwrap_or_else(|e| panic!("Failed to load fixture {path}: {e}"))
}

pub(crate) fn app_with(config: Config) -> Router {
    adaptive_ide::router(Arc::new(Runner::new(config)))
}

pub(crate) fn app() -> Router {
    app_with(Config::default())
}

/// Send a request and return the status with the body parsed as JSON
pub(crate) async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("request failed");
    let status = response.status();
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("failed to read body");
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&body).into_owned())
        })
    };
    (status, value)
}

pub(crate) async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub(crate) async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}
