//! Blink Library - Transfer Transaction Engine
//!
//! Turns a `(payer, recipient, token, amount)` request into an unsigned,
//! serialized v0 Solana transaction:
//! - classify the token as native SOL or an SPL mint
//! - resolve mint decimals and probe the recipient's token account
//! - convert the decimal amount to base units without floating point
//! - build the ordered instruction list and compile it
//!
//! Chain access goes through [`chain::ChainStateReader`], so the engine can
//! run against a live RPC node or [`mock::MockChainReader`].

pub mod actions;
pub mod amount;
pub mod asset;
pub mod chain;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod holding;
pub mod instructions;
pub mod mint;
pub mod mock;
pub mod transaction;

// Re-export main types for convenience
pub use amount::{format_base_units, normalize, HumanAmount, NormalizedAmount};
pub use asset::{classify, Asset};
pub use chain::{ChainError, ChainStateReader, RpcChainReader};
pub use config::ChainConfig;
pub use engine::{build_transfer_transaction, BuiltTransfer, TransferEngine, TransferRequest, TransferSummary};
pub use error::{Result, TransferError, TransferErrorKind};
pub use transaction::SerializedTransaction;
