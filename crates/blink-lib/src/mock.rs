//! In-memory chain state for tests and offline runs
//!
//! [`MockChainReader`] answers [`ChainStateReader`] calls from a fixed account
//! map and records every call so tests can assert which reads happened and
//! in what order.

use crate::chain::{ChainError, ChainStateReader};
use crate::constants::token_program;
use async_trait::async_trait;
use solana_sdk::{account::Account, hash::Hash, program_pack::Pack, pubkey::Pubkey};
use spl_associated_token_account::get_associated_token_address;
use std::collections::HashMap;
use std::sync::Mutex;

/// Rent-exempt minimum for a mint account
const MINT_RENT_LAMPORTS: u64 = 1_461_600;

/// Rent-exempt minimum for a token account
const TOKEN_ACCOUNT_RENT_LAMPORTS: u64 = 2_039_280;

/// A recorded reader call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    LatestBlockhash,
    GetAccount(Pubkey),
}

/// Deterministic [`ChainStateReader`] backed by a `HashMap`
#[derive(Debug)]
pub struct MockChainReader {
    accounts: HashMap<Pubkey, Account>,
    blockhash: Hash,
    failing: bool,
    calls: Mutex<Vec<MockCall>>,
}

impl Default for MockChainReader {
    fn default() -> Self {
        Self::new()
    }
}

impl MockChainReader {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
            blockhash: Hash::new_from_array([7; 32]),
            failing: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Insert an arbitrary account
    pub fn with_account(mut self, pubkey: Pubkey, account: Account) -> Self {
        self.accounts.insert(pubkey, account);
        self
    }

    /// Insert an initialized SPL Token mint with the given precision
    pub fn with_mint(self, mint: Pubkey, decimals: u8) -> Self {
        let account = Account {
            lamports: MINT_RENT_LAMPORTS,
            data: mint_account_data(decimals),
            owner: token_program(),
            executable: false,
            rent_epoch: 0,
        };
        self.with_account(mint, account)
    }

    /// Insert the associated token account of `owner` for `mint`
    pub fn with_token_account(self, owner: &Pubkey, mint: &Pubkey) -> Self {
        let ata = get_associated_token_address(owner, mint);
        let account = Account {
            lamports: TOKEN_ACCOUNT_RENT_LAMPORTS,
            data: vec![0; spl_token::state::Account::LEN],
            owner: token_program(),
            executable: false,
            rent_epoch: 0,
        };
        self.with_account(ata, account)
    }

    /// Use a fixed blockhash
    pub fn with_blockhash(mut self, blockhash: Hash) -> Self {
        self.blockhash = blockhash;
        self
    }

    /// Make every read fail as if the RPC node were unreachable
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn blockhash(&self) -> Hash {
        self.blockhash
    }

    /// All calls made so far, in order
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    /// Number of reads of any kind
    pub fn total_reads(&self) -> usize {
        self.calls().len()
    }

    pub fn account_reads(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, MockCall::GetAccount(_)))
            .count()
    }

    pub fn blockhash_reads(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, MockCall::LatestBlockhash))
            .count()
    }

    fn record(&self, call: MockCall) -> Result<(), ChainError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        if self.failing {
            return Err(ChainError::Unavailable("mock RPC node is down".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ChainStateReader for MockChainReader {
    async fn latest_blockhash(&self) -> Result<Hash, ChainError> {
        self.record(MockCall::LatestBlockhash)?;
        Ok(self.blockhash)
    }

    async fn get_account(&self, pubkey: &Pubkey) -> Result<Option<Account>, ChainError> {
        self.record(MockCall::GetAccount(*pubkey))?;
        Ok(self.accounts.get(pubkey).cloned())
    }
}

/// Packed SPL Token mint state: no mint or freeze authority, zero supply.
///
/// Layout: mint authority option (36), supply (8), decimals (1),
/// is_initialized (1), freeze authority option (36).
pub fn mint_account_data(decimals: u8) -> Vec<u8> {
    let mut data = vec![0; spl_token::state::Mint::LEN];
    data[44] = decimals;
    data[45] = 1;
    data
}
