//! Billing errors for order creation and entitlement queries.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | SchoolNotFound | 400 |
//! | ValidationFailed | 400 |
//! | VendorRejected | 400 |
//! | Infrastructure | 400 |
//!
//! Vendor and database messages are relayed verbatim to the caller.

use crate::domain::foundation::{DomainError, ErrorCode, SchoolId, ValidationError};

/// Billing-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillingError {
    /// No school with this id.
    SchoolNotFound(SchoolId),

    /// Request field failed validation.
    ValidationFailed { field: String, message: String },

    /// Payment vendor refused or failed the call.
    VendorRejected(String),

    /// Database or other infrastructure failure.
    Infrastructure(String),
}

impl BillingError {
    pub fn school_not_found(id: SchoolId) -> Self {
        BillingError::SchoolNotFound(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        BillingError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn vendor_rejected(message: impl Into<String>) -> Self {
        BillingError::VendorRejected(message.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        BillingError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            BillingError::SchoolNotFound(_) => ErrorCode::SchoolNotFound,
            BillingError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            BillingError::VendorRejected(_) => ErrorCode::ExternalServiceError,
            BillingError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-facing error message.
    pub fn message(&self) -> String {
        match self {
            BillingError::SchoolNotFound(id) => format!("School not found: {}", id),
            BillingError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            BillingError::VendorRejected(msg) => msg.clone(),
            BillingError::Infrastructure(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for BillingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for BillingError {}

impl From<DomainError> for BillingError {
    fn from(err: DomainError) -> Self {
        BillingError::Infrastructure(err.message)
    }
}

impl From<ValidationError> for BillingError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::EmptyField { field }
            | ValidationError::NotPositive { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field.clone(),
        };
        BillingError::ValidationFailed {
            field,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_message_is_relayed_verbatim() {
        let err = BillingError::vendor_rejected("Pagar.me API error (422): invalid customer");
        assert_eq!(err.to_string(), "Pagar.me API error (422): invalid customer");
        assert_eq!(err.code(), ErrorCode::ExternalServiceError);
    }

    #[test]
    fn school_not_found_names_the_id() {
        let id = SchoolId::new();
        let err = BillingError::school_not_found(id);
        assert!(err.message().contains(&id.to_string()));
        assert_eq!(err.code(), ErrorCode::SchoolNotFound);
    }

    #[test]
    fn validation_error_keeps_field_name() {
        let err: BillingError = ValidationError::not_positive("amount_cents", 0).into();
        match err {
            BillingError::ValidationFailed { field, .. } => assert_eq!(field, "amount_cents"),
            other => panic!("Expected ValidationFailed, got {:?}", other),
        }
    }

    #[test]
    fn domain_error_becomes_infrastructure() {
        let err: BillingError = DomainError::database("timeout").into();
        assert_eq!(err, BillingError::Infrastructure("timeout".to_string()));
    }
}
