//! Blink API - HTTP action server
//!
//! Serves the Solana Actions endpoints for the transfer action on top of
//! [`blink_lib::TransferEngine`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod types;

use axum::{
    http::{HeaderName, HeaderValue},
    routing::get,
    Router,
};
use handlers::*;
use tower_http::{
    cors::CorsLayer, set_header::SetResponseHeaderLayer, timeout::TimeoutLayer,
    trace::TraceLayer,
};
use types::ApiState;

/// Actions specification version advertised to clients
pub const ACTION_VERSION: &str = "2.4";

pub const ACTION_VERSION_HEADER: &str = "x-action-version";
pub const BLOCKCHAIN_IDS_HEADER: &str = "x-blockchain-ids";

/// Create API router with all endpoints
pub fn create_router(state: ApiState) -> Router {
    let blockchain_id = state.config.cluster.blockchain_id();
    let request_timeout = state.config.request_timeout;

    let actions = Router::new()
        .route("/actions.json", get(actions_json))
        .route(
            TRANSFER_PATH,
            get(get_transfer_metadata).post(post_transfer),
        )
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static(ACTION_VERSION_HEADER),
            HeaderValue::from_static(ACTION_VERSION),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static(BLOCKCHAIN_IDS_HEADER),
            HeaderValue::from_static(blockchain_id),
        ));

    Router::new()
        .route("/api/v1/health", get(health_check))
        .merge(actions)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
