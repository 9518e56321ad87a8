//! Request, response and state types for the action server

use crate::config::ApiConfig;
use blink_lib::TransferEngine;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared handler state
#[derive(Clone)]
pub struct ApiState {
    pub engine: TransferEngine,
    pub config: Arc<ApiConfig>,
}

impl ApiState {
    pub fn new(engine: TransferEngine, config: ApiConfig) -> Self {
        Self {
            engine,
            config: Arc::new(config),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

/// Error body returned by every failing action request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// `actions.json` discovery document
#[derive(Debug, Serialize, Deserialize)]
pub struct ActionsJson {
    pub rules: Vec<ActionRule>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRule {
    pub path_pattern: String,
    pub api_path: String,
}

/// Metadata a client renders before asking for the payer account
#[derive(Debug, Serialize, Deserialize)]
pub struct ActionMetadata {
    #[serde(rename = "type")]
    pub kind: String,
    pub icon: String,
    pub title: String,
    pub description: String,
    pub label: String,
    pub links: ActionLinks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ActionLinks {
    pub actions: Vec<LinkedAction>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LinkedAction {
    pub label: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ActionParameter>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionParameter {
    pub name: String,
    pub label: String,
    pub required: bool,
}

impl ActionParameter {
    pub fn required(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            required: true,
        }
    }
}

/// Query string of the transfer POST
#[derive(Debug, Default, Deserialize)]
pub struct TransferQuery {
    pub to: Option<String>,
    pub token: Option<String>,
    pub amount: Option<String>,
}

/// Body of the transfer POST
#[derive(Debug, Serialize, Deserialize)]
pub struct ActionPostRequest {
    pub account: String,
}

/// Unsigned transaction handed back to the client for signing
#[derive(Debug, Serialize, Deserialize)]
pub struct ActionPostResponse {
    /// Base64 bincode-encoded v0 transaction
    pub transaction: String,
    pub message: String,
}
