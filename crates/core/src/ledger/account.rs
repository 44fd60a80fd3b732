//! Customer accounts holding an exact decimal balance.

use minibank_shared::types::{AccountId, BankId};
use rust_decimal::Decimal;

use super::error::LedgerError;

/// A customer account.
///
/// The balance is a `Decimal`, so debits and credits are exact and keep the
/// scale of their operands (`1000.12345 - 100` is `900.12345`). A `Decimal`
/// holds at most 28 significant digits and magnitudes up to `Decimal::MAX`.
/// An operation whose exact result falls outside that range fails with
/// [`LedgerError::PrecisionLoss`] or [`LedgerError::ArithmeticOverflow`]
/// and leaves the balance untouched; nothing is ever rounded.
///
/// Equality compares `owner` and `balance` only, and the balance comparison
/// is scale-sensitive (`1.0` and `1.00` differ). Two distinct accounts with
/// the same owner and balance are equal, and an account stops being equal to
/// its former peers as soon as its balance moves. `Account` therefore
/// implements neither `Eq` nor `Hash`: key collections by [`Account::id`].
#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    owner: String,
    balance: Decimal,
    bank: Option<BankId>,
}

impl Account {
    /// Creates a standalone account with a fresh id.
    ///
    /// The initial balance is taken as given, negative values included.
    #[must_use]
    pub fn new(owner: impl Into<String>, balance: Decimal) -> Self {
        Self {
            id: AccountId::new(),
            owner: owner.into(),
            balance,
            bank: None,
        }
    }

    /// Returns the account id.
    #[must_use]
    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Returns the account holder.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Replaces the account holder.
    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = owner.into();
    }

    /// Returns the current balance.
    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Replaces the balance without any check.
    pub fn set_balance(&mut self, balance: Decimal) {
        self.balance = balance;
    }

    /// Returns the bank this account was registered with, if any.
    #[must_use]
    pub fn bank(&self) -> Option<BankId> {
        self.bank
    }

    /// Replaces the bank back-reference.
    pub fn set_bank(&mut self, bank: Option<BankId>) {
        self.bank = bank;
    }

    /// Withdraws `amount` from the balance.
    ///
    /// Fails with [`LedgerError::InsufficientFunds`] when the resulting
    /// balance would be negative; the balance is left untouched in that case.
    /// The sign of `amount` is not checked, so a negative debit adds funds.
    pub fn debit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        self.balance = debited(self.balance, amount)?;
        Ok(())
    }

    /// Deposits `amount` into the balance.
    ///
    /// Only fails when the exact sum cannot be held by a `Decimal`.
    pub fn credit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        self.balance = credited(self.balance, amount)?;
        Ok(())
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner
            && self.balance == other.balance
            && self.balance.scale() == other.balance.scale()
    }
}

/// Balance left after debiting `amount` from `balance`.
pub(crate) fn debited(balance: Decimal, amount: Decimal) -> Result<Decimal, LedgerError> {
    let new_balance = exact_sum(balance, -amount)?;
    if new_balance < Decimal::ZERO {
        return Err(LedgerError::InsufficientFunds);
    }
    Ok(new_balance)
}

/// Balance reached after crediting `amount` to `balance`.
pub(crate) fn credited(balance: Decimal, amount: Decimal) -> Result<Decimal, LedgerError> {
    exact_sum(balance, amount)
}

/// `lhs + rhs`, refusing results that overflow or had to be rounded.
///
/// `Decimal` rounds silently once a sum needs more than 28 significant
/// digits; a rounded sum no longer gives back both operands.
pub(crate) fn exact_sum(lhs: Decimal, rhs: Decimal) -> Result<Decimal, LedgerError> {
    let sum = lhs
        .checked_add(rhs)
        .ok_or(LedgerError::ArithmeticOverflow)?;
    if sum.checked_sub(rhs) != Some(lhs) || sum.checked_sub(lhs) != Some(rhs) {
        return Err(LedgerError::PrecisionLoss);
    }
    Ok(sum)
}
