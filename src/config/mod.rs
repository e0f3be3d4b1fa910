//! Service configuration.
//!
//! Everything comes from the environment (a `.env` file is honoured in
//! development). Keys use the `SCHOOL_BILLING` prefix with `__` between
//! nesting levels:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `SCHOOL_BILLING__SERVER__PORT` | `server.port` |
//! | `SCHOOL_BILLING__DATABASE__URL` | `database.url` |
//! | `SCHOOL_BILLING__PAYMENT__PAGARME_SECRET_KEY` | `payment.pagarme_secret_key` |
//! | `SCHOOL_BILLING__PAYMENT__WEBHOOK_TOKEN` | `payment.webhook_token` |
//!
//! ```no_run
//! use school_billing::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! config.validate()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod database;
mod error;
mod payment;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use payment::PaymentConfig;
pub use server::{CorsOrigins, Environment, ServerConfig};

use serde::Deserialize;

const ENV_PREFIX: &str = "SCHOOL_BILLING";

/// Root configuration. `database` and `payment` have required keys; `server`
/// falls back to defaults entirely.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub payment: PaymentConfig,
}

impl AppConfig {
    /// Reads `.env` (if any) and the process environment.
    ///
    /// # Errors
    ///
    /// `ConfigError::LoadError` when a required key is missing or a value
    /// does not parse into its field type.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }

        let source = config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__");

        config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
            .map_err(ConfigError::from)
    }

    /// Semantic checks that deserialization cannot express.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.payment.validate()
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
