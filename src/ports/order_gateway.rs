//! Order gateway port for instant-payment (Pix) orders.
//!
//! One synchronous call per order. No retry, no backoff: any vendor failure
//! is returned to the caller with the vendor's message intact.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::billing::BillingError;
use crate::domain::foundation::{EmailAddress, SchoolId};

/// Port for creating Pix orders at a payment vendor.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Create an order and return its payment reference.
    async fn create_pix_order(&self, request: PixOrderRequest) -> Result<PixOrder, OrderError>;
}

/// Everything the vendor needs to issue a Pix charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixOrderRequest {
    /// Tenant paying; echoed back in webhook metadata.
    pub school_id: SchoolId,

    /// Customer display name.
    pub customer_name: String,

    /// Customer email, when the school has one.
    pub customer_email: Option<EmailAddress>,

    /// Amount to charge, in cents.
    pub amount_cents: i64,

    /// Line item description.
    pub description: String,

    /// Line item code.
    pub item_code: String,

    /// Seconds until the QR code expires.
    pub expires_in_secs: u32,
}

/// An order created at the vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixOrder {
    /// Vendor order id.
    pub order_id: String,

    /// Vendor order status (usually `pending`).
    pub status: String,

    /// Amount the vendor will charge, in cents.
    pub amount_cents: i64,

    /// Pix copy-paste code.
    pub pix_code: Option<String>,

    /// URL of the rendered QR code image.
    pub qr_code_url: Option<String>,

    /// When the QR code stops being payable.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Order creation failures.
#[derive(Debug, Clone, Error)]
pub enum OrderError {
    /// Could not reach the vendor.
    #[error("Network error: {0}")]
    Network(String),

    /// Vendor answered with a non-success status.
    #[error("{vendor} API error ({status}): {body}")]
    Rejected {
        vendor: &'static str,
        status: u16,
        body: String,
    },

    /// Vendor answered 2xx but the body was not an order.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Vendor accepted the request but did not issue a Pix code.
    #[error("{vendor} order {order_id} {status}: no Pix code issued")]
    Failed {
        vendor: &'static str,
        order_id: String,
        status: String,
    },
}

impl From<OrderError> for BillingError {
    fn from(err: OrderError) -> Self {
        BillingError::vendor_rejected(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_gateway_is_object_safe() {
        fn _accepts_dyn(_gateway: &dyn OrderGateway) {}
    }

    #[test]
    fn rejected_error_relays_vendor_body() {
        let err = OrderError::Rejected {
            vendor: "Pagar.me",
            status: 422,
            body: r#"{"message":"customer.document is required"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"Pagar.me API error (422): {"message":"customer.document is required"}"#
        );

        let billing: BillingError = err.into();
        assert!(matches!(billing, BillingError::VendorRejected(_)));
    }

    #[test]
    fn failed_order_names_vendor_status() {
        let err = OrderError::Failed {
            vendor: "Pagar.me",
            order_id: "or_9".to_string(),
            status: "failed".to_string(),
        };
        assert_eq!(err.to_string(), "Pagar.me order or_9 failed: no Pix code issued");
    }
}
