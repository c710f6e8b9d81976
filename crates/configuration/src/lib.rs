use rust_decimal::Decimal;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{Config, LimitsProfileId, LimitsSettings};

/// Loads the application configuration.
///
/// When `path` is given, that file must exist and parse. Without a path,
/// an `opticalc.toml` in the working directory is used if present and the
/// built-in defaults (conservative limits profile, no multiplier override)
/// apply otherwise.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let builder = match path {
        Some(file) => config::Config::builder().add_source(config::File::from(file)),
        None => config::Config::builder()
            .add_source(config::File::with_name("opticalc").required(false)),
    };

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.build()?.try_deserialize::<Config>()?;
    validate(&config)?;

    Ok(config)
}

/// Rejects settings that parsed but cannot be acted on.
fn validate(config: &Config) -> Result<(), ConfigError> {
    if let Some(multiplier) = config.limits.max_multiplier {
        if multiplier <= Decimal::ZERO {
            return Err(ConfigError::InvalidMultiplier(multiplier));
        }
    }
    Ok(())
}
