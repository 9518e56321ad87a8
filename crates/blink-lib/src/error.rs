//! Error types for transfer transaction construction
//!
//! Every failure the engine can produce is one of the variants below. Input
//! problems are fatal for the request; chain-state failures are the only
//! retryable category.

use crate::chain::ChainError;
use serde::Serialize;
use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, TransferError>;

/// Errors surfaced by [`crate::engine::TransferEngine`] and its components
#[derive(Debug, Error)]
pub enum TransferError {
    /// A payer, recipient or mint string is not a valid base58 address
    #[error("Invalid {field} address '{value}': {reason}")]
    InvalidAddress {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// The mint account does not exist
    #[error("Token mint not found: {mint}")]
    MintNotFound { mint: String },

    /// The account exists but is not a usable SPL token mint
    #[error("Account {mint} is not a valid token mint: {reason}")]
    MintMalformed { mint: String, reason: String },

    /// Amount is not a positive decimal representable in base units
    #[error("Invalid amount '{amount}': {reason}")]
    AmountOutOfRange { amount: String, reason: String },

    /// Transient failure while reading chain state
    #[error("Chain state unavailable during {operation}")]
    ChainStateUnavailable {
        operation: &'static str,
        #[source]
        source: ChainError,
    },

    /// Instruction list could not be turned into a valid transaction
    #[error("Failed to assemble transaction: {reason}")]
    AssemblyError { reason: String },
}

/// Coarse classification used by callers to pick a response status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferErrorKind {
    InvalidAddress,
    MintNotFound,
    MintMalformed,
    AmountOutOfRange,
    ChainStateUnavailable,
    AssemblyError,
}

impl TransferError {
    /// Create a new invalid address error
    pub fn invalid_address<V: Into<String>, R: ToString>(
        field: &'static str,
        value: V,
        reason: R,
    ) -> Self {
        Self::InvalidAddress {
            field,
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a new amount error
    pub fn amount<A: Into<String>, R: Into<String>>(amount: A, reason: R) -> Self {
        Self::AmountOutOfRange {
            amount: amount.into(),
            reason: reason.into(),
        }
    }

    /// Create a new malformed mint error
    pub fn mint_malformed<M: ToString, R: Into<String>>(mint: M, reason: R) -> Self {
        Self::MintMalformed {
            mint: mint.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a new chain state error for the named read
    pub fn chain(operation: &'static str, source: ChainError) -> Self {
        Self::ChainStateUnavailable { operation, source }
    }

    /// Create a new assembly error
    pub fn assembly<R: Into<String>>(reason: R) -> Self {
        Self::AssemblyError {
            reason: reason.into(),
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> TransferErrorKind {
        match self {
            Self::InvalidAddress { .. } => TransferErrorKind::InvalidAddress,
            Self::MintNotFound { .. } => TransferErrorKind::MintNotFound,
            Self::MintMalformed { .. } => TransferErrorKind::MintMalformed,
            Self::AmountOutOfRange { .. } => TransferErrorKind::AmountOutOfRange,
            Self::ChainStateUnavailable { .. } => TransferErrorKind::ChainStateUnavailable,
            Self::AssemblyError { .. } => TransferErrorKind::AssemblyError,
        }
    }

    /// Check if this error is retryable by the caller
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ChainStateUnavailable { .. })
    }

    /// Check if this error was caused by the request itself
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAddress { .. }
                | Self::MintNotFound { .. }
                | Self::MintMalformed { .. }
                | Self::AmountOutOfRange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_chain_errors_are_retryable() {
        let chain = TransferError::chain(
            "mint lookup",
            ChainError::Unavailable("connection reset".to_string()),
        );
        assert!(chain.is_retryable());
        assert!(!chain.is_client_error());

        let assembly = TransferError::assembly("empty instruction list");
        assert!(!assembly.is_retryable());
        assert!(!assembly.is_client_error());

        let amount = TransferError::amount("-1", "amount must be positive");
        assert!(!amount.is_retryable());
        assert!(amount.is_client_error());
    }

    #[test]
    fn test_display_names_field() {
        let err = TransferError::invalid_address("recipient", "not-a-key", "Invalid Base58 string");
        assert_eq!(
            err.to_string(),
            "Invalid recipient address 'not-a-key': Invalid Base58 string"
        );
        assert_eq!(err.kind(), TransferErrorKind::InvalidAddress);
    }
}
