//! Chain-state access used by the engine
//!
//! The engine only needs two reads: the latest blockhash and a raw account
//! lookup. Both go through [`ChainStateReader`] so the RPC client can be
//! swapped for [`crate::mock::MockChainReader`] in tests.

use crate::config::ChainConfig;
use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{account::Account, commitment_config::CommitmentConfig, hash::Hash, pubkey::Pubkey};
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors raised by a chain-state reader
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("RPC error: {0}")]
    Rpc(#[from] Box<solana_client::client_error::ClientError>),
    #[error("Chain state unavailable: {0}")]
    Unavailable(String),
}

impl From<solana_client::client_error::ClientError> for ChainError {
    fn from(err: solana_client::client_error::ClientError) -> Self {
        Self::Rpc(Box::new(err))
    }
}

/// Read-only view of chain state shared by all in-flight requests
#[async_trait]
pub trait ChainStateReader: Send + Sync {
    /// Fetch the most recent blockhash to bind as the transaction's freshness reference
    async fn latest_blockhash(&self) -> Result<Hash, ChainError>;

    /// Fetch an account, returning `None` when it does not exist
    async fn get_account(&self, pubkey: &Pubkey) -> Result<Option<Account>, ChainError>;
}

/// [`ChainStateReader`] backed by a Solana JSON-RPC endpoint
pub struct RpcChainReader {
    client: RpcClient,
    commitment: CommitmentConfig,
}

impl RpcChainReader {
    /// Create a reader from chain configuration
    pub fn new(config: &ChainConfig) -> Self {
        let client = RpcClient::new_with_timeout_and_commitment(
            config.rpc_url.clone(),
            config.timeout,
            config.commitment,
        );
        Self {
            client,
            commitment: config.commitment,
        }
    }

    /// Get the RPC endpoint this reader talks to
    pub fn url(&self) -> String {
        self.client.url()
    }
}

#[async_trait]
impl ChainStateReader for RpcChainReader {
    #[instrument(skip(self))]
    async fn latest_blockhash(&self) -> Result<Hash, ChainError> {
        let (blockhash, last_valid_block_height) = self
            .client
            .get_latest_blockhash_with_commitment(self.commitment)
            .await?;
        debug!(%blockhash, last_valid_block_height, "Fetched latest blockhash");
        Ok(blockhash)
    }

    #[instrument(skip(self), fields(pubkey = %pubkey))]
    async fn get_account(&self, pubkey: &Pubkey) -> Result<Option<Account>, ChainError> {
        let response = self
            .client
            .get_account_with_commitment(pubkey, self.commitment)
            .await?;
        debug!(
            slot = response.context.slot,
            found = response.value.is_some(),
            "Fetched account"
        );
        Ok(response.value)
    }
}
