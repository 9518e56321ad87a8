use crate::constants::token_program;
use solana_sdk::{instruction::Instruction, pubkey::Pubkey};
use spl_associated_token_account::instruction as ata_instruction;

/// Creates the instruction that opens an Associated Token Account (ATA).
///
/// The ATA address is derived from `owner_pubkey` and `mint_pubkey`, so no
/// new keypair is involved; only the funder signs.
///
/// # Arguments
/// * `funder_pubkey`: The account that pays rent for the new ATA.
/// * `owner_pubkey`: The wallet that will own the new ATA.
/// * `mint_pubkey`: The SPL Token mint the ATA will hold.
///
/// # Returns
/// An `Instruction` object for the account creation.
pub fn create_instruction(
    funder_pubkey: &Pubkey,
    owner_pubkey: &Pubkey,
    mint_pubkey: &Pubkey,
) -> Instruction {
    ata_instruction::create_associated_token_account(
        funder_pubkey,
        owner_pubkey,
        mint_pubkey,
        &token_program(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use spl_associated_token_account::get_associated_token_address;

    #[test]
    fn test_create_account_roles() {
        let funder = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let ix = create_instruction(&funder, &owner, &mint);

        assert_eq!(ix.program_id, spl_associated_token_account::id());
        assert_eq!(ix.accounts[0].pubkey, funder);
        assert!(ix.accounts[0].is_signer && ix.accounts[0].is_writable);
        assert_eq!(
            ix.accounts[1].pubkey,
            get_associated_token_address(&owner, &mint)
        );
        assert_eq!(ix.accounts[2].pubkey, owner);
        assert!(!ix.accounts[2].is_signer);
        assert_eq!(ix.accounts[3].pubkey, mint);
    }
}
