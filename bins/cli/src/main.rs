//! Minibank walkthrough
//!
//! Opens a bank, registers two accounts, and runs one transfer that clears
//! and one that is refused for insufficient funds.

use rust_decimal::Decimal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use minibank_core::ledger::{Account, Bank};
use minibank_shared::{AppConfig, AppError, AppResult};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bank = run(&config)?;

    for account in bank.accounts() {
        info!(
            bank = bank.name(),
            owner = account.owner(),
            balance = %account.balance(),
            "final balance"
        );
    }
    info!(total = %bank.total_balance()?, "ledger closed");

    Ok(())
}

fn run(config: &AppConfig) -> AppResult<Bank> {
    let mut bank = Bank::with_name(config.bank.name.clone());
    info!(bank = bank.name(), bank_id = %bank.id(), "bank opened");

    let john = bank.add_account(Account::new("John Doe", Decimal::new(2500, 0)));
    let andres = bank.add_account(Account::new("Andres", Decimal::new(15_008_989, 4)));

    bank.transfer_between(andres, john, Decimal::new(500, 0))?;
    info!(amount = 500, "transfer from Andres to John Doe cleared");

    let overdraft = Decimal::new(5000, 0);
    if let Err(err) = bank.transfer_between(andres, john, overdraft) {
        let err = AppError::from(err);
        warn!(code = err.error_code(), %overdraft, "{err}");
    }

    Ok(bank)
}
