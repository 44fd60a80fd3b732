//! In-memory ledger.
//!
//! This module implements the core ledger functionality:
//! - Accounts with exact decimal balances (debit and credit)
//! - Banks that register accounts and transfer between them
//! - Error types for ledger operations

pub mod account;
pub mod bank;
pub mod error;

#[cfg(test)]
mod account_props;

pub use account::Account;
pub use bank::Bank;
pub use error::LedgerError;
