//! Webhook error types for payment reconciliation.
//!
//! Every failure is terminal for the current invocation. Vendors retry on
//! their own schedule when they see a non-2xx answer; this service does not
//! classify errors as retryable.

use axum::http::StatusCode;
use thiserror::Error;

use crate::domain::foundation::{DomainError, SchoolId};

/// Errors that occur while reconciling a webhook.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Webhook token did not match the configured shared secret.
    #[error("Invalid webhook token")]
    InvalidToken,

    /// Body is not JSON or does not match the vendor envelope.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Required field missing from the webhook payload.
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// Metadata present but malformed (e.g. school id is not a UUID).
    #[error("Invalid metadata: {0}")]
    InvalidMetadata(String),

    /// Neither metadata nor payer email pointed at a school.
    #[error("Unable to resolve school from payment metadata or payer email")]
    UnresolvedSchool,

    /// Metadata named a school that does not exist.
    #[error("School not found: {0}")]
    SchoolNotFound(SchoolId),

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(String),
}

impl WebhookError {
    /// Maps the error to an HTTP status code.
    ///
    /// Everything but a bad token is answered with 400 and the message.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebhookError::InvalidToken => StatusCode::UNAUTHORIZED,
            WebhookError::ParseError(_)
            | WebhookError::MissingField(_)
            | WebhookError::InvalidMetadata(_)
            | WebhookError::UnresolvedSchool
            | WebhookError::SchoolNotFound(_)
            | WebhookError::Database(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Machine-readable code for the error body.
    pub fn code(&self) -> &'static str {
        match self {
            WebhookError::InvalidToken => "INVALID_WEBHOOK_TOKEN",
            WebhookError::ParseError(_) => "INVALID_PAYLOAD",
            WebhookError::MissingField(_) => "MISSING_FIELD",
            WebhookError::InvalidMetadata(_) => "INVALID_METADATA",
            WebhookError::UnresolvedSchool => "UNRESOLVED_SCHOOL",
            WebhookError::SchoolNotFound(_) => "SCHOOL_NOT_FOUND",
            WebhookError::Database(_) => "DATABASE_ERROR",
        }
    }
}

impl From<DomainError> for WebhookError {
    fn from(err: DomainError) -> Self {
        WebhookError::Database(err.message)
    }
}
