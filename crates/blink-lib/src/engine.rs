//! Transfer engine: raw request in, unsigned serialized transaction out.

use crate::amount::{HumanAmount, NormalizedAmount};
use crate::asset::{classify, parse_address, Asset};
use crate::chain::ChainStateReader;
use crate::constants::NATIVE_DECIMALS;
use crate::error::{Result, TransferError};
use crate::holding::holding_account_exists;
use crate::instructions::build_instructions;
use crate::mint::resolve_decimals;
use crate::transaction::{assemble, serialize, SerializedTransaction};
use serde::{Deserialize, Serialize};
use solana_sdk::{hash::Hash, pubkey::Pubkey};
use std::sync::Arc;
use tracing::{info, instrument};

/// Raw, unvalidated transfer parameters as received from a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferRequest {
    pub payer: String,
    pub recipient: String,
    pub token: String,
    pub amount: String,
}

impl TransferRequest {
    pub fn new(
        payer: impl Into<String>,
        recipient: impl Into<String>,
        token: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            payer: payer.into(),
            recipient: recipient.into(),
            token: token.into(),
            amount: amount.into(),
        }
    }
}

/// What a built transaction does, for logging and client messages
#[derive(Debug, Clone, Serialize)]
pub struct TransferSummary {
    #[serde(serialize_with = "serialize_display")]
    pub payer: Pubkey,
    #[serde(serialize_with = "serialize_display")]
    pub recipient: Pubkey,
    pub asset: Asset,
    pub amount: NormalizedAmount,
    pub creates_holding_account: bool,
    pub instruction_count: usize,
    #[serde(serialize_with = "serialize_display")]
    pub recent_blockhash: Hash,
}

impl TransferSummary {
    /// One-line description suitable for showing to the signer
    pub fn message(&self) -> String {
        let what = match self.asset {
            Asset::Native => format!("{} SOL", self.amount),
            Asset::Fungible(mint) => format!("{} of token {mint}", self.amount),
        };
        let mut message = format!("Send {what} to {}", self.recipient);
        if self.creates_holding_account {
            message.push_str(" (creates the recipient's token account)");
        }
        message
    }
}

fn serialize_display<T: std::fmt::Display, S: serde::Serializer>(
    value: &T,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Output of [`TransferEngine::build_transfer_transaction`]
#[derive(Debug, Clone)]
pub struct BuiltTransfer {
    pub transaction: SerializedTransaction,
    pub summary: TransferSummary,
}

/// Builds unsigned transfer transactions against an injected chain reader.
///
/// The engine holds no per-request state; one instance is shared by all
/// requests.
#[derive(Clone)]
pub struct TransferEngine {
    reader: Arc<dyn ChainStateReader>,
}

impl TransferEngine {
    pub fn new(reader: Arc<dyn ChainStateReader>) -> Self {
        Self { reader }
    }

    /// Build the unsigned transaction moving `amount` of `token` from payer to recipient.
    ///
    /// All input validation happens before the first chain read. For tokens the
    /// mint lookup and the recipient account probe run concurrently; the
    /// blockhash is fetched last.
    #[instrument(
        name = "build_transfer_transaction",
        skip(self, request),
        fields(
            payer = %request.payer,
            recipient = %request.recipient,
            token = %request.token,
            amount = %request.amount
        )
    )]
    pub async fn build_transfer_transaction(&self, request: &TransferRequest) -> Result<BuiltTransfer> {
        let payer = parse_address("payer", &request.payer)?;
        let recipient = parse_address("recipient", &request.recipient)?;
        let asset = classify(&request.token)?;
        let human_amount = HumanAmount::parse(&request.amount)?;

        let (amount, recipient_holding_exists) = match &asset {
            Asset::Native => (
                NormalizedAmount::new(human_amount.to_base_units(NATIVE_DECIMALS)?, NATIVE_DECIMALS),
                true,
            ),
            Asset::Fungible(mint) => {
                let reader = self.reader.as_ref();
                let (decimals, exists) = tokio::try_join!(
                    resolve_decimals(reader, mint),
                    holding_account_exists(reader, &recipient, mint)
                )?;
                (
                    NormalizedAmount::new(human_amount.to_base_units(decimals)?, decimals),
                    exists,
                )
            }
        };

        let instructions =
            build_instructions(&payer, &recipient, &asset, amount, recipient_holding_exists)?;

        let recent_blockhash = self
            .reader
            .latest_blockhash()
            .await
            .map_err(|e| TransferError::chain("blockhash lookup", e))?;

        let transaction = serialize(&assemble(&payer, recent_blockhash, &instructions)?)?;

        let summary = TransferSummary {
            payer,
            recipient,
            asset,
            amount,
            creates_holding_account: !recipient_holding_exists,
            instruction_count: instructions.len(),
            recent_blockhash,
        };
        info!(
            asset = %summary.asset,
            base_units = amount.base_units,
            decimals = amount.decimals,
            creates_holding_account = summary.creates_holding_account,
            bytes = transaction.len(),
            "Built transfer transaction"
        );

        Ok(BuiltTransfer {
            transaction,
            summary,
        })
    }
}

/// Convenience wrapper over [`TransferEngine::build_transfer_transaction`]
pub async fn build_transfer_transaction(
    reader: Arc<dyn ChainStateReader>,
    payer: &str,
    recipient: &str,
    token: &str,
    amount: &str,
) -> Result<SerializedTransaction> {
    let request = TransferRequest::new(payer, recipient, token, amount);
    TransferEngine::new(reader)
        .build_transfer_transaction(&request)
        .await
        .map(|built| built.transaction)
}
