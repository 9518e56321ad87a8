//! Numeric constants for amounts and protocol limits

/// Token amounts (in smallest units)
pub mod tokens {
    /// SOL amounts (9 decimals)
    pub mod sol {
        /// 1 SOL in lamports (1,000,000,000)
        pub const ONE: u64 = 1_000_000_000;
    }
}

/// Solana-specific constants
pub mod solana {
    /// Decimal places of the native coin (1 SOL = 10^9 lamports)
    pub const NATIVE_DECIMALS: u8 = 9;

    /// Maximum serialized transaction size accepted by the network
    pub const MAX_TRANSACTION_SIZE: usize = solana_sdk::packet::PACKET_DATA_SIZE;
}
