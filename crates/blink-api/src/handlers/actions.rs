//! Solana Actions endpoints for the transfer action

use crate::error::ApiError;
use crate::types::*;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    response::Json,
};
use blink_lib::TransferRequest;
use tracing::{info, instrument, Span};

/// Route prefix served by this module
pub const TRANSFER_PATH: &str = "/api/actions/transfer";

/// Discovery document mapping website paths to the action API
pub async fn actions_json() -> Json<ActionsJson> {
    Json(ActionsJson {
        rules: vec![ActionRule {
            path_pattern: "/transfer".to_string(),
            api_path: TRANSFER_PATH.to_string(),
        }],
    })
}

/// Action metadata with the parameterised transfer links
pub async fn get_transfer_metadata(State(state): State<ApiState>) -> Json<ActionMetadata> {
    let config = &state.config;

    let (to, mut parameters) = match &config.default_recipient {
        Some(recipient) => (recipient.clone(), Vec::new()),
        None => (
            "{to}".to_string(),
            vec![ActionParameter::required("to", "Recipient wallet address")],
        ),
    };

    let mut token_parameters = parameters.clone();
    token_parameters.push(ActionParameter::required("token", "Token mint address"));
    token_parameters.push(ActionParameter::required("amount", "Amount of tokens"));
    parameters.push(ActionParameter::required("amount", "Amount of SOL"));

    Json(ActionMetadata {
        kind: "action".to_string(),
        icon: config.icon_url.clone(),
        title: config.title.clone(),
        description: config.description.clone(),
        label: "Send".to_string(),
        links: ActionLinks {
            actions: vec![
                LinkedAction {
                    label: "Send SOL".to_string(),
                    href: format!("{TRANSFER_PATH}?to={to}&token=SOL&amount={{amount}}"),
                    parameters,
                },
                LinkedAction {
                    label: "Send token".to_string(),
                    href: format!("{TRANSFER_PATH}?to={to}&token={{token}}&amount={{amount}}"),
                    parameters: token_parameters,
                },
            ],
        },
    })
}

/// Build the unsigned transfer transaction for the posted payer account
#[instrument(skip_all, fields(account = tracing::field::Empty))]
pub async fn post_transfer(
    State(state): State<ApiState>,
    Query(query): Query<TransferQuery>,
    body: Result<Json<ActionPostRequest>, JsonRejection>,
) -> Result<Json<ActionPostResponse>, ApiError> {
    let Json(body) = body?;
    Span::current().record("account", body.account.as_str());

    let recipient = query
        .to
        .or_else(|| state.config.default_recipient.clone())
        .ok_or(ApiError::MissingParameter("to"))?;
    let token = query.token.unwrap_or_else(|| "SOL".to_string());
    let amount = query.amount.ok_or(ApiError::MissingParameter("amount"))?;

    let request = TransferRequest::new(body.account, recipient, token, amount);
    let built = state.engine.build_transfer_transaction(&request).await?;

    info!(
        bytes = built.transaction.len(),
        instruction_count = built.summary.instruction_count,
        "Returning unsigned transaction"
    );

    Ok(Json(ActionPostResponse {
        transaction: built.transaction.to_base64(),
        message: built.summary.message(),
    }))
}
