//! Engine configuration management.

use serde::Deserialize;

/// Engine configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Savings accrual settings.
    pub savings: SavingsConfig,
    /// Money display settings.
    pub money: MoneyConfig,
    /// Logging configuration.
    pub log: LogConfig,
}

/// Savings accrual configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SavingsConfig {
    /// Minimum number of daily balances before interest accrues.
    pub minimum_days: usize,
    /// Days in the interest year (usually 360 or 365).
    pub annual_divisor: u32,
    /// Balance-selection policy used when a request does not name one.
    pub default_policy: String,
}

impl Default for SavingsConfig {
    fn default() -> Self {
        Self {
            minimum_days: 30,
            annual_divisor: 360,
            default_policy: "lowest".to_string(),
        }
    }
}

/// Money display configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MoneyConfig {
    /// Decimal places used when unrounded results are shown.
    pub scale: u32,
}

impl Default for MoneyConfig {
    fn default() -> Self {
        Self { scale: 2 }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "coop=info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}`, then `COOP_*` variables
    /// with `__` separating nested keys (`COOP_SAVINGS__ANNUAL_DIVISOR`).
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed or a value has the wrong type.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("COOP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
