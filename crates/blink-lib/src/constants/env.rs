//! Environment variable configuration for the transfer engine
//!
//! Each getter reads one variable and falls back to a default when the
//! variable is unset or cannot be parsed. Unparseable values are logged
//! at `warn`.

use std::env;
use std::str::FromStr;
use tracing::warn;

/// Solana configuration from environment variables
pub mod solana {
    use super::*;

    /// Default public mainnet RPC endpoint
    pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

    /// Get the Solana RPC URL
    pub fn rpc_url() -> String {
        env::var("SOLANA_RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string())
    }

    /// Get commitment level used for chain reads
    pub fn commitment_level() -> String {
        env::var("SOLANA_COMMITMENT").unwrap_or_else(|_| "confirmed".to_string())
    }

    /// Default RPC request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

    /// Get RPC request timeout in seconds
    pub fn timeout_seconds() -> u64 {
        match env::var("SOLANA_TIMEOUT_SECONDS") {
            Ok(raw) => u64::from_str(raw.trim()).unwrap_or_else(|_| {
                warn!(
                    value = %raw,
                    default = DEFAULT_TIMEOUT_SECONDS,
                    "Invalid SOLANA_TIMEOUT_SECONDS, using default"
                );
                DEFAULT_TIMEOUT_SECONDS
            }),
            Err(_) => DEFAULT_TIMEOUT_SECONDS,
        }
    }
}
