//! Shared setup for action server tests

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use blink_api::{config::ApiConfig, create_router, types::ApiState};
use blink_lib::{mock::MockChainReader, TransferEngine};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Build an app backed by `reader` with default configuration
pub fn create_app(reader: Arc<MockChainReader>) -> Router {
    create_app_with_config(reader, ApiConfig::default())
}

pub fn create_app_with_config(reader: Arc<MockChainReader>, config: ApiConfig) -> Router {
    let state = ApiState::new(TransferEngine::new(reader), config);
    create_router(state)
}

pub async fn send(app: Router, request: Request<Body>) -> (Response<Body>, Value) {
    let response = app.oneshot(request).await.unwrap();
    let (parts, body) = response.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (Response::from_parts(parts, Body::empty()), json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap()
}

pub fn post_transfer(query: &str, account: &str) -> Request<Body> {
    post_transfer_body(
        query,
        &serde_json::json!({ "account": account }).to_string(),
    )
}

pub fn post_transfer_body(query: &str, body: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("/api/actions/transfer?{query}"))
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
