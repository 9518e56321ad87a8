//! Constants module for centralized configuration values

pub mod addresses;
pub mod amounts;
pub mod env;

// Re-export commonly used constants for convenience
pub use addresses::{
    programs::{associated_token_program, system_program, token_program},
    tokens::{NATIVE_ALIASES, WRAPPED_SOL_MINT},
};

pub use amounts::{
    solana::{MAX_TRANSACTION_SIZE, NATIVE_DECIMALS},
    tokens::sol,
};
