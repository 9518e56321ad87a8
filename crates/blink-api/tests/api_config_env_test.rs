//! Tests for action server configuration from environment variables

use blink_api::config::{ApiConfig, ApiConfigError, Cluster, DEFAULT_HOST, DEFAULT_PORT};
use serial_test::serial;
use std::env;
use std::time::Duration;

const KEYS: &[&str] = &[
    "BLINK_HOST",
    "PORT",
    "BLINK_REQUEST_TIMEOUT_SECONDS",
    "BLINK_CLUSTER",
    "BLINK_ICON_URL",
    "BLINK_TITLE",
    "BLINK_DESCRIPTION",
    "BLINK_DEFAULT_RECIPIENT",
];

fn clear() {
    for key in KEYS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_default_values() {
    clear();

    let config = ApiConfig::from_env().unwrap();
    assert_eq!(config.host, DEFAULT_HOST);
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.request_timeout, Duration::from_secs(30));
    assert_eq!(config.cluster, Cluster::Mainnet);
    assert!(config.default_recipient.is_none());
}

#[test]
#[serial]
fn test_env_override() {
    clear();
    env::set_var("BLINK_HOST", "127.0.0.1");
    env::set_var("PORT", "8088");
    env::set_var("BLINK_REQUEST_TIMEOUT_SECONDS", "5");
    env::set_var("BLINK_CLUSTER", "devnet");
    env::set_var("BLINK_TITLE", "Tip jar");
    env::set_var("BLINK_DEFAULT_RECIPIENT", "  9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM ");

    let config = ApiConfig::from_env().unwrap();
    assert_eq!(config.bind_addr(), "127.0.0.1:8088");
    assert_eq!(config.request_timeout, Duration::from_secs(5));
    assert_eq!(config.cluster, Cluster::Devnet);
    assert_eq!(config.title, "Tip jar");
    assert_eq!(
        config.default_recipient.as_deref(),
        Some("9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM")
    );

    clear();
}

#[test]
#[serial]
fn test_invalid_values_fall_back() {
    clear();
    env::set_var("PORT", "invalid");
    env::set_var("BLINK_REQUEST_TIMEOUT_SECONDS", "-1");
    env::set_var("BLINK_DEFAULT_RECIPIENT", "   ");

    let config = ApiConfig::from_env().unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.request_timeout, Duration::from_secs(30));
    assert!(config.default_recipient.is_none());

    clear();
}

#[test]
#[serial]
fn test_unknown_cluster_is_rejected() {
    clear();
    env::set_var("BLINK_CLUSTER", "localnet");
    assert_eq!(
        ApiConfig::from_env().unwrap_err(),
        ApiConfigError::UnknownCluster("localnet".to_string())
    );
    clear();
}
