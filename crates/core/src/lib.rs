//! Core ledger logic for Minibank.
//!
//! This crate contains pure business logic with ZERO persistence or network dependencies.
//! Accounts, banks and the transfer rules between them live here.
//!
//! # Modules
//!
//! - `ledger` - Accounts, banks, and transfers with exact decimal balances

pub mod ledger;
