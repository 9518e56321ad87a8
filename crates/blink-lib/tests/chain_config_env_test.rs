//! Tests for chain configuration loaded from environment variables

use blink_lib::config::{ChainConfig, ConfigError};
use blink_lib::constants::env::solana;
use serial_test::serial;
use solana_sdk::commitment_config::CommitmentConfig;
use std::env;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Log sink shared with a test subscriber
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn clear() {
    env::remove_var("SOLANA_RPC_URL");
    env::remove_var("SOLANA_COMMITMENT");
    env::remove_var("SOLANA_TIMEOUT_SECONDS");
}

#[test]
#[serial]
fn test_default_values() {
    clear();

    assert_eq!(solana::rpc_url(), solana::DEFAULT_RPC_URL);
    assert_eq!(solana::commitment_level(), "confirmed");
    assert_eq!(solana::timeout_seconds(), 30);

    let config = ChainConfig::from_env().unwrap();
    assert_eq!(config.rpc_url, solana::DEFAULT_RPC_URL);
    assert_eq!(config.commitment, CommitmentConfig::confirmed());
    assert_eq!(config.timeout, Duration::from_secs(30));
}

#[test]
#[serial]
fn test_env_override() {
    clear();
    env::set_var("SOLANA_RPC_URL", "http://127.0.0.1:8899");
    env::set_var("SOLANA_COMMITMENT", "finalized");
    env::set_var("SOLANA_TIMEOUT_SECONDS", "5");

    let config = ChainConfig::from_env().unwrap();
    assert_eq!(config.rpc_url, "http://127.0.0.1:8899");
    assert_eq!(config.commitment, CommitmentConfig::finalized());
    assert_eq!(config.timeout, Duration::from_secs(5));

    clear();
}

#[test]
#[serial]
fn test_invalid_timeout_falls_back_with_warning() {
    clear();
    env::set_var("SOLANA_TIMEOUT_SECONDS", "soon");

    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let timeout = tracing::subscriber::with_default(subscriber, solana::timeout_seconds);

    assert_eq!(timeout, solana::DEFAULT_TIMEOUT_SECONDS);
    let output = logs.contents();
    assert!(output.contains("WARN"), "expected a warning, got: {output}");
    assert!(output.contains("Invalid SOLANA_TIMEOUT_SECONDS"));
    assert!(output.contains("soon"));
    clear();
}

#[test]
#[serial]
fn test_unknown_commitment_is_rejected() {
    clear();
    env::set_var("SOLANA_COMMITMENT", "eventually");
    assert_eq!(
        ChainConfig::from_env().unwrap_err(),
        ConfigError::UnknownCommitment("eventually".to_string())
    );
    clear();
}
