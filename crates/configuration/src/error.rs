use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from file: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Invalid limits.max_multiplier: must be greater than 0, got {0}")]
    InvalidMultiplier(Decimal),
}
