use crate::constants::token_program;
use crate::error::{Result, TransferError};
use solana_sdk::{instruction::Instruction, pubkey::Pubkey};

/// Creates an SPL token `TransferChecked` instruction.
///
/// The checked form carries the mint and its decimals, so the token program
/// rejects the transfer if `decimals` does not match the mint on chain.
///
/// # Arguments
/// * `from_pubkey`: The source token account pubkey.
/// * `mint_pubkey`: The mint of both token accounts.
/// * `to_pubkey`: The destination token account pubkey.
/// * `authority_pubkey`: The owner of the source account, who signs.
/// * `amount`: The amount of tokens to transfer, in base units.
/// * `decimals`: The mint's decimals.
///
/// # Returns
/// A `Result<Instruction>` for the transfer.
pub fn create_checked_instruction(
    from_pubkey: &Pubkey,
    mint_pubkey: &Pubkey,
    to_pubkey: &Pubkey,
    authority_pubkey: &Pubkey,
    amount: u64,
    decimals: u8,
) -> Result<Instruction> {
    spl_token::instruction::transfer_checked(
        &token_program(),
        from_pubkey,
        mint_pubkey,
        to_pubkey,
        authority_pubkey,
        &[], // The authority is the only signer required.
        amount,
        decimals,
    )
    .map_err(|e| TransferError::assembly(format!("failed to encode token transfer: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use spl_token::instruction::TokenInstruction;

    #[test]
    fn test_checked_transfer_layout() {
        let source = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let destination = Pubkey::new_unique();
        let authority = Pubkey::new_unique();

        let ix =
            create_checked_instruction(&source, &mint, &destination, &authority, 2_500_000, 6)
                .unwrap();

        assert_eq!(ix.program_id, spl_token::id());
        let keys: Vec<_> = ix.accounts.iter().map(|meta| meta.pubkey).collect();
        assert_eq!(keys, vec![source, mint, destination, authority]);
        assert!(ix.accounts[0].is_writable);
        assert!(!ix.accounts[1].is_writable);
        assert!(ix.accounts[2].is_writable);
        assert!(ix.accounts[3].is_signer);

        match TokenInstruction::unpack(&ix.data).unwrap() {
            TokenInstruction::TransferChecked { amount, decimals } => {
                assert_eq!(amount, 2_500_000);
                assert_eq!(decimals, 6);
            }
            other => panic!("unexpected instruction: {other:?}"),
        }
    }
}
