//! Ordered instruction list for a single transfer
//!
//! [`InstructionPlan`] accumulates instructions in execution order. It only
//! accepts a holding-account creation before the transfer, so a plan that
//! uses an account before creating it cannot be built.

use crate::actions::{spl_init_account, spl_transfer};
use crate::amount::NormalizedAmount;
use crate::asset::Asset;
use crate::error::{Result, TransferError};
use crate::holding::holding_account_address;
use solana_sdk::{instruction::Instruction, pubkey::Pubkey};
use solana_system_interface::instruction as system_instruction;
use tracing::debug;

/// Builder that enforces creation-before-transfer ordering
#[derive(Debug, Default)]
pub struct InstructionPlan {
    instructions: Vec<Instruction>,
    has_transfer: bool,
}

impl InstructionPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `owner`'s associated token account for `mint`, paid by `funder`
    pub fn create_holding_account(
        mut self,
        funder: &Pubkey,
        owner: &Pubkey,
        mint: &Pubkey,
    ) -> Result<Self> {
        if self.has_transfer {
            return Err(TransferError::assembly(
                "holding account creation must precede the transfer",
            ));
        }
        self.instructions
            .push(spl_init_account::create_instruction(funder, owner, mint));
        Ok(self)
    }

    /// Move lamports between two system accounts. `from` signs and both are writable.
    pub fn native_transfer(mut self, from: &Pubkey, to: &Pubkey, lamports: u64) -> Result<Self> {
        self.ensure_single_transfer()?;
        self.instructions
            .push(system_instruction::transfer(from, to, lamports));
        self.has_transfer = true;
        Ok(self)
    }

    /// Move tokens between two token accounts with a decimals check
    pub fn checked_transfer(
        mut self,
        source: &Pubkey,
        mint: &Pubkey,
        destination: &Pubkey,
        authority: &Pubkey,
        amount: NormalizedAmount,
    ) -> Result<Self> {
        self.ensure_single_transfer()?;
        self.instructions.push(spl_transfer::create_checked_instruction(
            source,
            mint,
            destination,
            authority,
            amount.base_units,
            amount.decimals,
        )?);
        self.has_transfer = true;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Finish the plan, returning the instructions in execution order
    pub fn finish(self) -> Result<Vec<Instruction>> {
        if !self.has_transfer {
            return Err(TransferError::assembly("instruction plan has no transfer"));
        }
        Ok(self.instructions)
    }

    fn ensure_single_transfer(&self) -> Result<()> {
        if self.has_transfer {
            return Err(TransferError::assembly(
                "only one transfer is allowed per transaction",
            ));
        }
        Ok(())
    }
}

/// Build the instructions that move `amount` of `asset` from `payer` to `recipient`.
///
/// For tokens, `recipient_holding_exists` decides whether the recipient's
/// associated token account is opened first. It is ignored for native SOL.
pub fn build_instructions(
    payer: &Pubkey,
    recipient: &Pubkey,
    asset: &Asset,
    amount: NormalizedAmount,
    recipient_holding_exists: bool,
) -> Result<Vec<Instruction>> {
    let plan = match asset {
        Asset::Native => InstructionPlan::new().native_transfer(payer, recipient, amount.base_units)?,
        Asset::Fungible(mint) => {
            let source = holding_account_address(payer, mint);
            let destination = holding_account_address(recipient, mint);

            let mut plan = InstructionPlan::new();
            if !recipient_holding_exists {
                plan = plan.create_holding_account(payer, recipient, mint)?;
            }
            plan.checked_transfer(&source, mint, &destination, payer, amount)?
        }
    };

    debug!(
        asset = %asset,
        base_units = amount.base_units,
        instruction_count = plan.len(),
        "Built transfer instructions"
    );
    plan.finish()
}
