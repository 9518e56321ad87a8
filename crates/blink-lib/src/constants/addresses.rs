//! Blockchain address constants for Solana mainnet

use solana_sdk::pubkey::Pubkey;

/// Token identifiers
pub mod tokens {
    /// Wrapped SOL mint address. Requests naming it are treated as native SOL.
    pub const WRAPPED_SOL_MINT: &str = "So11111111111111111111111111111111111111112";

    /// Aliases for the native coin, matched case-insensitively.
    pub const NATIVE_ALIASES: [&str; 2] = ["SOL", "SOLANA"];
}

/// Program IDs
pub mod programs {
    use super::*;

    /// Get System Program as Pubkey
    pub fn system_program() -> Pubkey {
        solana_sdk::system_program::id()
    }

    /// Get Token Program as Pubkey
    pub fn token_program() -> Pubkey {
        spl_token::id()
    }

    /// Get Associated Token Program as Pubkey
    pub fn associated_token_program() -> Pubkey {
        spl_associated_token_account::id()
    }
}
