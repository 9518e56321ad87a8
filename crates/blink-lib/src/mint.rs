//! Mint metadata resolution

use crate::chain::ChainStateReader;
use crate::constants::token_program;
use crate::error::{Result, TransferError};
use solana_sdk::program_pack::Pack;
use solana_sdk::pubkey::Pubkey;
use spl_token::state::Mint;
use tracing::{debug, instrument};

/// Read the mint account and return its decimal precision.
#[instrument(skip(reader), fields(mint = %mint))]
pub async fn resolve_decimals(reader: &dyn ChainStateReader, mint: &Pubkey) -> Result<u8> {
    let account = reader
        .get_account(mint)
        .await
        .map_err(|e| TransferError::chain("mint lookup", e))?
        .ok_or_else(|| TransferError::MintNotFound {
            mint: mint.to_string(),
        })?;

    if account.owner != token_program() {
        return Err(TransferError::mint_malformed(
            mint,
            format!("account is owned by {}, not the SPL Token program", account.owner),
        ));
    }

    let state = Mint::unpack(&account.data)
        .map_err(|e| TransferError::mint_malformed(mint, format!("failed to unpack mint: {e}")))?;

    debug!(decimals = state.decimals, supply = state.supply, "Resolved mint");
    Ok(state.decimals)
}
