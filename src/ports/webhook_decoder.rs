//! Webhook decoder port.
//!
//! Each vendor adapter turns its JSON envelope into a [`PaymentEvent`]. The
//! decoder only parses; deciding what to do with the event is the domain's
//! job (see `plan_reconciliation`).

use crate::domain::billing::{PaymentEvent, PaymentVendor, WebhookError};

/// Decodes a raw vendor webhook body.
pub trait WebhookDecoder: Send + Sync {
    /// Vendor whose envelope this decoder understands.
    fn vendor(&self) -> PaymentVendor;

    /// Parse the raw body.
    ///
    /// # Errors
    ///
    /// - `ParseError` if the body is not JSON in the vendor's shape
    /// - `MissingField` if the status is absent
    /// - `InvalidMetadata` if a school id is present but not a UUID
    fn decode(&self, payload: &[u8]) -> Result<PaymentEvent, WebhookError>;
}
