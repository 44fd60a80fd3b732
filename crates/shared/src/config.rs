//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Bank configuration.
    #[serde(default)]
    pub bank: BankConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Bank configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BankConfig {
    /// Display name given to the bank opened at startup.
    #[serde(default = "default_bank_name")]
    pub name: String,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            name: default_bank_name(),
        }
    }
}

fn default_bank_name() -> String {
    "Banco del Estado".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "minibank=info,minibank_core=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("MINIBANK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
