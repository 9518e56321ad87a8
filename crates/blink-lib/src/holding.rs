//! Associated token account lookup

use crate::chain::ChainStateReader;
use crate::error::{Result, TransferError};
use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address;
use tracing::{debug, instrument};

/// Derive the associated token account holding `mint` for `owner`
pub fn holding_account_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(owner, mint)
}

/// Check whether `owner` already has an associated token account for `mint`.
#[instrument(skip(reader), fields(owner = %owner, mint = %mint))]
pub async fn holding_account_exists(
    reader: &dyn ChainStateReader,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Result<bool> {
    let ata = holding_account_address(owner, mint);
    let exists = reader
        .get_account(&ata)
        .await
        .map_err(|e| TransferError::chain("holding account lookup", e))?
        .is_some();

    debug!(%ata, exists, "Probed holding account");
    Ok(exists)
}
