//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid host address: {0}")]
    InvalidHost(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool max_connections must be at least 1 and at least min_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("Invalid Pagar.me secret key format")]
    InvalidPagarmeKey,

    #[error("Pagar.me API base URL must be http(s)")]
    InvalidApiBaseUrl,

    #[error("Monthly fee must be a positive amount of cents")]
    InvalidMonthlyFee,

    #[error("Pix expiry must be between 1 second and 30 days")]
    InvalidPixExpiry,

    #[error("Webhook token is set but empty")]
    EmptyWebhookToken,
}
