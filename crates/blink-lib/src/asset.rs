//! Asset classification
//!
//! A token identifier is resolved once, at request entry, into an [`Asset`].
//! Everything downstream branches on the enum instead of re-inspecting the
//! raw string.

use crate::constants::{NATIVE_ALIASES, WRAPPED_SOL_MINT};
use crate::error::{Result, TransferError};
use serde::Serialize;
use solana_sdk::pubkey::Pubkey;
use std::fmt;
use std::str::FromStr;

/// The kind of value a transfer moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "mint", rename_all = "snake_case")]
pub enum Asset {
    /// Native SOL, moved by the System Program
    Native,
    /// An SPL token identified by its mint
    Fungible(#[serde(serialize_with = "serialize_pubkey")] Pubkey),
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "SOL"),
            Self::Fungible(mint) => write!(f, "{mint}"),
        }
    }
}

fn serialize_pubkey<S: serde::Serializer>(
    pubkey: &Pubkey,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(pubkey)
}

/// Classify a raw token identifier.
///
/// `SOL` and `SOLANA` (any case) and the wrapped SOL mint are native; any
/// other identifier must be a valid mint address.
pub fn classify(token: &str) -> Result<Asset> {
    let token = token.trim();

    if NATIVE_ALIASES
        .iter()
        .any(|alias| token.eq_ignore_ascii_case(alias))
        || token == WRAPPED_SOL_MINT
    {
        return Ok(Asset::Native);
    }

    parse_address("token", token).map(Asset::Fungible)
}

/// Parse a base58 address, naming the request field on failure
pub fn parse_address(field: &'static str, value: &str) -> Result<Pubkey> {
    let value = value.trim();
    if value.is_empty() {
        return Err(TransferError::invalid_address(field, value, "address is empty"));
    }
    Pubkey::from_str(value).map_err(|e| TransferError::invalid_address(field, value, e))
}
