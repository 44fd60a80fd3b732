//! Banks and transfers between accounts.

use minibank_shared::types::{AccountId, BankId};
use rust_decimal::Decimal;
use tracing::debug;

use super::account::{credited, debited, exact_sum, Account};
use super::error::LedgerError;

/// A bank holding an ordered collection of accounts.
///
/// Accounts keep their insertion order and are never removed. Registering
/// the same logical account twice is not guarded against.
///
/// All mutation goes through `&mut`, so a `Bank` cannot be raced on. Callers
/// that share one across threads wrap it in a lock.
///
/// `Bank` is not `Clone`: a copy would carry the same [`BankId`] and the
/// account back-references could no longer tell the two apart.
#[derive(Debug, Default)]
pub struct Bank {
    id: BankId,
    name: String,
    accounts: Vec<Account>,
}

impl Bank {
    /// Creates an empty, unnamed bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty bank with the given name.
    #[must_use]
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the bank id.
    #[must_use]
    pub fn id(&self) -> BankId {
        self.id
    }

    /// Returns the bank name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the bank.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the accounts in registration order.
    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Returns the accounts for in-place edits.
    pub fn accounts_mut(&mut self) -> &mut [Account] {
        &mut self.accounts
    }

    /// Replaces the whole collection as-is. Back-references are not touched.
    pub fn set_accounts(&mut self, accounts: Vec<Account>) {
        self.accounts = accounts;
    }

    /// Registers an account with this bank.
    ///
    /// Points the account's back-reference at this bank and appends it.
    pub fn add_account(&mut self, mut account: Account) -> AccountId {
        account.set_bank(Some(self.id));
        let account_id = account.id();
        debug!(
            bank_id = %self.id,
            account_id = %account_id,
            owner = account.owner(),
            "account registered"
        );
        self.accounts.push(account);
        account_id
    }

    /// Returns the first account registered under `id`.
    #[must_use]
    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id() == id)
    }

    /// Returns the first account registered under `id`, mutably.
    pub fn account_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.id() == id)
    }

    /// Returns the first account whose owner matches exactly.
    #[must_use]
    pub fn find_by_owner(&self, owner: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.owner() == owner)
    }

    /// Returns true if any account belongs to `owner`.
    #[must_use]
    pub fn contains_owner(&self, owner: &str) -> bool {
        self.accounts.iter().any(|account| account.owner() == owner)
    }

    /// Sum of all held balances.
    ///
    /// Fails rather than round when the exact sum does not fit a `Decimal`.
    pub fn total_balance(&self) -> Result<Decimal, LedgerError> {
        self.accounts
            .iter()
            .try_fold(Decimal::ZERO, |total, account| exact_sum(total, account.balance()))
    }

    /// Moves `amount` from `source` to `destination`.
    ///
    /// The debit is checked first; if it fails the error is returned
    /// unchanged and `destination` is never credited. Both new balances are
    /// worked out before either account is written, so a credit that cannot
    /// be held exactly leaves both accounts as they were. Neither account has
    /// to be registered with this bank.
    pub fn transfer(
        &self,
        source: &mut Account,
        destination: &mut Account,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        let outcome = debited(source.balance(), amount).and_then(|source_balance| {
            credited(destination.balance(), amount)
                .map(|destination_balance| (source_balance, destination_balance))
        });
        let (source_balance, destination_balance) = match outcome {
            Ok(balances) => balances,
            Err(err) => {
                debug!(
                    bank_id = %self.id,
                    source = %source.id(),
                    destination = %destination.id(),
                    %amount,
                    error = %err,
                    "transfer rejected"
                );
                return Err(err);
            }
        };
        source.set_balance(source_balance);
        destination.set_balance(destination_balance);
        debug!(
            bank_id = %self.id,
            source = %source.id(),
            destination = %destination.id(),
            %amount,
            "transfer completed"
        );
        Ok(())
    }

    /// Moves `amount` between two accounts held by this bank.
    ///
    /// Both ids are resolved and both new balances worked out before anything
    /// is mutated. When the ids name the same account the debit and the
    /// credit both land on it.
    pub fn transfer_between(
        &mut self,
        source: AccountId,
        destination: AccountId,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        let source_index = self.position(source)?;
        let destination_index = self.position(destination)?;

        let outcome = debited(self.accounts[source_index].balance(), amount).and_then(
            |source_balance| {
                let starting = if source_index == destination_index {
                    source_balance
                } else {
                    self.accounts[destination_index].balance()
                };
                credited(starting, amount)
                    .map(|destination_balance| (source_balance, destination_balance))
            },
        );
        let (source_balance, destination_balance) = match outcome {
            Ok(balances) => balances,
            Err(err) => {
                debug!(
                    bank_id = %self.id,
                    %source,
                    %destination,
                    %amount,
                    error = %err,
                    "transfer rejected"
                );
                return Err(err);
            }
        };
        self.accounts[source_index].set_balance(source_balance);
        self.accounts[destination_index].set_balance(destination_balance);
        debug!(
            bank_id = %self.id,
            %source,
            %destination,
            %amount,
            "transfer completed"
        );
        Ok(())
    }

    fn position(&self, id: AccountId) -> Result<usize, LedgerError> {
        self.accounts
            .iter()
            .position(|account| account.id() == id)
            .ok_or(LedgerError::AccountNotFound(id))
    }
}
