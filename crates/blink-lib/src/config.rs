//! Chain connection configuration

use crate::constants::env;
use solana_sdk::commitment_config::CommitmentConfig;
use std::time::Duration;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown commitment level '{0}', expected processed, confirmed or finalized")]
    UnknownCommitment(String),
}

/// Settings for the RPC-backed chain reader
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// Solana RPC endpoint URL
    pub rpc_url: String,
    /// Commitment used for account and blockhash reads
    pub commitment: CommitmentConfig,
    /// Timeout for RPC requests
    pub timeout: Duration,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: env::solana::DEFAULT_RPC_URL.to_string(),
            commitment: CommitmentConfig::confirmed(),
            timeout: Duration::from_secs(env::solana::DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

impl ChainConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            rpc_url: env::solana::rpc_url(),
            commitment: parse_commitment(&env::solana::commitment_level())?,
            timeout: Duration::from_secs(env::solana::timeout_seconds()),
        })
    }
}

/// Parse a commitment level name
pub fn parse_commitment(level: &str) -> Result<CommitmentConfig, ConfigError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "processed" => Ok(CommitmentConfig::processed()),
        "confirmed" => Ok(CommitmentConfig::confirmed()),
        "finalized" => Ok(CommitmentConfig::finalized()),
        other => Err(ConfigError::UnknownCommitment(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commitment() {
        assert_eq!(
            parse_commitment("Finalized").unwrap(),
            CommitmentConfig::finalized()
        );
        assert_eq!(
            parse_commitment(" processed ").unwrap(),
            CommitmentConfig::processed()
        );
        assert_eq!(
            parse_commitment("max"),
            Err(ConfigError::UnknownCommitment("max".to_string()))
        );
    }
}
