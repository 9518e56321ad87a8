//! Instruction constructors for the token programs a transfer touches.
//!
//! Each submodule is a thin, pure wrapper around the program's own
//! instruction builder. Ordering and account roles are decided by
//! [`crate::instructions`].

pub mod spl_init_account;
pub mod spl_transfer;
