//! Ledger error types.

use minibank_shared::types::AccountId;
use minibank_shared::AppError;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A debit would leave the account with a negative balance.
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// The exact result does not fit in a `Decimal`'s 28 significant digits.
    #[error("Amount exceeds decimal precision")]
    PrecisionLoss,

    /// The result exceeds the largest representable `Decimal`.
    #[error("Arithmetic overflow")]
    ArithmeticOverflow,

    /// No account with this id is registered with the bank.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),
}

impl LedgerError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientFunds => "INSUFFICIENT_FUNDS",
            Self::PrecisionLoss => "PRECISION_LOSS",
            Self::ArithmeticOverflow => "ARITHMETIC_OVERFLOW",
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientFunds
            | LedgerError::PrecisionLoss
            | LedgerError::ArithmeticOverflow => Self::BusinessRule(err.to_string()),
            LedgerError::AccountNotFound(_) => Self::NotFound(err.to_string()),
        }
    }
}
