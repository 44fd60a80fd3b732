//! Property-based tests for account debits and credits.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::account::Account;
use super::error::LedgerError;

/// Strategy for a non-negative balance with up to five decimal places.
fn balance_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000_000i64, 0u32..=5).prop_map(|(units, scale)| Decimal::new(units, scale))
}

/// Strategy for a balance with 20 or 21 integer digits, close to the
/// 28-digit precision limit.
fn wide_balance_strategy() -> impl Strategy<Value = Decimal> {
    (10i128.pow(19)..10i128.pow(21)).prop_map(|units| Decimal::from_i128_with_scale(units, 0))
}

/// Strategy for a balance within a thousand units of `Decimal::MAX`.
fn near_max_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000).prop_map(|gap| Decimal::MAX - Decimal::from(gap))
}

/// Strategy for any amount, negative values included.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000i64..10_000_000_000i64, 0u32..=5)
        .prop_map(|(units, scale)| Decimal::new(units, scale))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A debit that fits the balance subtracts exactly.
    #[test]
    fn prop_debit_within_balance_is_exact(
        balance in balance_strategy(),
        fraction in 0u32..=100,
    ) {
        let amount = balance * Decimal::from(fraction) / Decimal::ONE_HUNDRED;
        let mut account = Account::new("Andres", balance);

        prop_assert!(account.debit(amount).is_ok());
        prop_assert_eq!(account.balance(), balance - amount);
        prop_assert!(account.balance() >= Decimal::ZERO);
    }

    /// A debit larger than the balance fails and leaves it untouched.
    #[test]
    fn prop_overdraft_is_rejected(
        balance in balance_strategy(),
        excess in 1i64..1_000_000_000i64,
        scale in 0u32..=5,
    ) {
        let amount = balance + Decimal::new(excess, scale);
        let mut account = Account::new("Andres", balance);

        prop_assert_eq!(account.debit(amount), Err(LedgerError::InsufficientFunds));
        prop_assert_eq!(account.balance(), balance);
    }

    /// A debit succeeds exactly when the resulting balance is not negative.
    #[test]
    fn prop_debit_outcome_follows_sign(
        balance in amount_strategy(),
        amount in amount_strategy(),
    ) {
        let mut account = Account::new("Andres", balance);
        let result = account.debit(amount);

        if balance - amount < Decimal::ZERO {
            prop_assert_eq!(result, Err(LedgerError::InsufficientFunds));
            prop_assert_eq!(account.balance(), balance);
        } else {
            prop_assert!(result.is_ok());
            prop_assert_eq!(account.balance(), balance - amount);
        }
    }

    /// A credit always adds exactly, whatever the sign of the amount.
    #[test]
    fn prop_credit_is_exact(
        balance in amount_strategy(),
        amount in amount_strategy(),
    ) {
        let mut account = Account::new("Andres", balance);
        prop_assert!(account.credit(amount).is_ok());
        prop_assert_eq!(account.balance(), balance + amount);
    }

    /// Accounts with the same owner and balance compare equal.
    #[test]
    fn prop_value_equality(
        owner in "[A-Za-z ]{1,20}",
        balance in amount_strategy(),
    ) {
        let first = Account::new(owner.clone(), balance);
        let second = Account::new(owner, balance);
        prop_assert_ne!(first.id(), second.id());
        prop_assert_eq!(first, second);
    }

    /// Near the precision limit an operation is either exact or refused.
    #[test]
    fn prop_wide_balance_never_rounds(
        balance in wide_balance_strategy(),
        units in 1i64..1_000_000_000i64,
        scale in 0u32..=20,
        negative in any::<bool>(),
    ) {
        let amount = if negative { -Decimal::new(units, scale) } else { Decimal::new(units, scale) };

        let mut credited = Account::new("Andres", balance);
        match credited.credit(amount) {
            Ok(()) => {
                prop_assert_eq!(credited.balance() - balance, amount);
                prop_assert_eq!(credited.balance() - amount, balance);
            }
            Err(err) => {
                prop_assert_eq!(err, LedgerError::PrecisionLoss);
                prop_assert_eq!(credited.balance(), balance);
            }
        }

        let mut debited = Account::new("Andres", balance);
        match debited.debit(amount) {
            Ok(()) => {
                prop_assert_eq!(balance - debited.balance(), amount);
                prop_assert_eq!(debited.balance() + amount, balance);
            }
            Err(err) => {
                prop_assert_eq!(err, LedgerError::PrecisionLoss);
                prop_assert_eq!(debited.balance(), balance);
            }
        }

        // 21 integer digits leave room for at least 7 decimals.
        if scale <= 7 {
            prop_assert!(Account::new("Andres", balance).credit(amount).is_ok());
        }
    }

    /// Growing a balance past `Decimal::MAX` is an error, never a panic.
    #[test]
    fn prop_overflow_is_reported(
        balance in near_max_strategy(),
        excess in 1_000i64..1_000_000i64,
    ) {
        let amount = Decimal::from(excess);

        let mut account = Account::new("Andres", balance);
        prop_assert_eq!(account.credit(amount), Err(LedgerError::ArithmeticOverflow));
        prop_assert_eq!(account.debit(-amount), Err(LedgerError::ArithmeticOverflow));
        prop_assert_eq!(account.balance(), balance);
    }
}
