//! Shared helpers for blink-lib integration tests

#![allow(dead_code)]

use blink_lib::{mock::MockChainReader, SerializedTransaction};
use solana_sdk::{
    message::{v0, VersionedMessage},
    pubkey::Pubkey,
    transaction::VersionedTransaction,
};
use std::sync::Arc;

/// USDC mint on mainnet, used as a realistic 6-decimal token
pub const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

/// Decode engine output back into a v0 message
pub fn decode_v0(bytes: &SerializedTransaction) -> (VersionedTransaction, v0::Message) {
    let tx: VersionedTransaction =
        bincode::deserialize(bytes.as_bytes()).expect("engine output should deserialize");
    let message = match &tx.message {
        VersionedMessage::V0(message) => message.clone(),
        VersionedMessage::Legacy(_) => panic!("engine must emit v0 messages"),
    };
    (tx, message)
}

/// Program id of the compiled instruction at `index`
pub fn program_of(message: &v0::Message, index: usize) -> Pubkey {
    let ix = &message.instructions[index];
    message.account_keys[usize::from(ix.program_id_index)]
}

/// Account keys referenced by the compiled instruction at `index`
pub fn accounts_of(message: &v0::Message, index: usize) -> Vec<Pubkey> {
    message.instructions[index]
        .accounts
        .iter()
        .map(|&i| message.account_keys[usize::from(i)])
        .collect()
}

pub fn shared(reader: MockChainReader) -> Arc<MockChainReader> {
    Arc::new(reader)
}
