//! Action server configuration loaded from environment variables

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_TITLE: &str = "Send SOL or tokens";
pub const DEFAULT_DESCRIPTION: &str =
    "Transfer native SOL or any SPL token to a Solana wallet. The recipient's token account is created when missing.";
pub const DEFAULT_ICON_URL: &str =
    "https://raw.githubusercontent.com/solana-labs/token-list/main/assets/mainnet/So11111111111111111111111111111111111111112/logo.png";

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiConfigError {
    #[error("Unknown cluster '{0}', expected mainnet, devnet or testnet")]
    UnknownCluster(String),
}

/// Solana cluster the server builds transactions for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cluster {
    #[default]
    Mainnet,
    Devnet,
    Testnet,
}

impl Cluster {
    /// CAIP-2 chain id sent in the `X-Blockchain-Ids` header
    pub fn blockchain_id(&self) -> &'static str {
        match self {
            Cluster::Mainnet => "solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp",
            Cluster::Devnet => "solana:EtWTRABZaYq6iMfeYKouRu166VU2xqa1",
            Cluster::Testnet => "solana:4uhcVJyU9pJkvQyS88uRDiswHXSCkY3z",
        }
    }
}

impl FromStr for Cluster {
    type Err = ApiConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "mainnet-beta" => Ok(Cluster::Mainnet),
            "devnet" => Ok(Cluster::Devnet),
            "testnet" => Ok(Cluster::Testnet),
            other => Err(ApiConfigError::UnknownCluster(other.to_string())),
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cluster::Mainnet => "mainnet",
            Cluster::Devnet => "devnet",
            Cluster::Testnet => "testnet",
        };
        f.write_str(name)
    }
}

/// HTTP server and action metadata settings
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
    pub cluster: Cluster,
    pub icon_url: String,
    pub title: String,
    pub description: String,
    /// Fixed recipient for the advertised actions; clients supply `to` when unset
    pub default_recipient: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS),
            cluster: Cluster::default(),
            icon_url: DEFAULT_ICON_URL.to_string(),
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            default_recipient: None,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ApiConfigError> {
        let cluster = match env::var("BLINK_CLUSTER") {
            Ok(value) => value.parse()?,
            Err(_) => Cluster::default(),
        };

        Ok(Self {
            host: env::var("BLINK_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_or_default("PORT", DEFAULT_PORT),
            request_timeout: Duration::from_secs(parse_or_default(
                "BLINK_REQUEST_TIMEOUT_SECONDS",
                DEFAULT_REQUEST_TIMEOUT_SECONDS,
            )),
            cluster,
            icon_url: env::var("BLINK_ICON_URL").unwrap_or_else(|_| DEFAULT_ICON_URL.to_string()),
            title: env::var("BLINK_TITLE").unwrap_or_else(|_| DEFAULT_TITLE.to_string()),
            description: env::var("BLINK_DESCRIPTION")
                .unwrap_or_else(|_| DEFAULT_DESCRIPTION.to_string()),
            default_recipient: env::var("BLINK_DEFAULT_RECIPIENT")
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        })
    }

    /// Socket address string to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or_default<T: FromStr + fmt::Display + Copy>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, %default, "Invalid value, using default");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_parsing() {
        assert_eq!("mainnet".parse::<Cluster>().unwrap(), Cluster::Mainnet);
        assert_eq!("Mainnet-Beta".parse::<Cluster>().unwrap(), Cluster::Mainnet);
        assert_eq!(" devnet ".parse::<Cluster>().unwrap(), Cluster::Devnet);
        assert_eq!("testnet".parse::<Cluster>().unwrap(), Cluster::Testnet);
        assert_eq!(
            "localnet".parse::<Cluster>().unwrap_err(),
            ApiConfigError::UnknownCluster("localnet".to_string())
        );
    }

    #[test]
    fn test_blockchain_ids_are_distinct() {
        let ids = [
            Cluster::Mainnet.blockchain_id(),
            Cluster::Devnet.blockchain_id(),
            Cluster::Testnet.blockchain_id(),
        ];
        assert!(ids.iter().all(|id| id.starts_with("solana:")));
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[1], ids[2]);
    }

    #[test]
    fn test_bind_addr() {
        let config = ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..ApiConfig::default()
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }
}
