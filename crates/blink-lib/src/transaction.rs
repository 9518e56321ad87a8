//! Versioned transaction assembly
//!
//! Compiles instructions into a v0 message with the payer as fee payer and
//! wraps it in an unsigned [`VersionedTransaction`]. Signature slots are
//! filled with placeholders for the wallet to replace.

use crate::constants::MAX_TRANSACTION_SIZE;
use crate::error::{Result, TransferError};
use base64::Engine;
use solana_sdk::{
    hash::Hash,
    instruction::Instruction,
    message::{v0, VersionedMessage},
    pubkey::Pubkey,
    signature::Signature,
    transaction::VersionedTransaction,
};
use tracing::{debug, instrument};

/// Bincode-encoded transaction bytes, ready for transport encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedTransaction(Vec<u8>);

impl SerializedTransaction {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Standard base64, the encoding wallets expect
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.0)
    }
}

/// Compile `instructions` into an unsigned v0 transaction paid for by `payer`.
#[instrument(skip(instructions), fields(payer = %payer, instruction_count = instructions.len()))]
pub fn assemble(
    payer: &Pubkey,
    recent_blockhash: Hash,
    instructions: &[Instruction],
) -> Result<VersionedTransaction> {
    if instructions.is_empty() {
        return Err(TransferError::assembly("instruction list is empty"));
    }

    let message = v0::Message::try_compile(payer, instructions, &[], recent_blockhash)
        .map_err(|e| TransferError::assembly(format!("failed to compile message: {e}")))?;

    let required = usize::from(message.header.num_required_signatures);
    let transaction = VersionedTransaction {
        signatures: vec![Signature::default(); required],
        message: VersionedMessage::V0(message),
    };

    debug!(
        required_signatures = required,
        %recent_blockhash,
        "Assembled v0 transaction"
    );
    Ok(transaction)
}

/// Serialize a transaction to its wire format, enforcing the network size limit.
pub fn serialize(transaction: &VersionedTransaction) -> Result<SerializedTransaction> {
    let bytes = bincode::serialize(transaction)
        .map_err(|e| TransferError::assembly(format!("failed to serialize transaction: {e}")))?;

    if bytes.len() > MAX_TRANSACTION_SIZE {
        return Err(TransferError::assembly(format!(
            "transaction is {} bytes, limit is {MAX_TRANSACTION_SIZE}",
            bytes.len()
        )));
    }
    Ok(SerializedTransaction(bytes))
}
