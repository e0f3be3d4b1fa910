//! Normalized payment event decoded from a vendor webhook.
//!
//! Vendor adapters translate their envelopes into [`PaymentEvent`] so the
//! reconciliation rules never see vendor JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{EmailAddress, SchoolId};

use super::{PaymentVendor, WebhookError};

/// Payment state reported by a vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Money received. The only status that renews a school.
    Paid,

    /// Awaiting payment (Pix not scanned yet, boleto not compensated).
    Pending,

    /// Payment declined, failed, or canceled before capture.
    Failed,

    /// Paid and later refunded.
    Refunded,

    /// Paid and later disputed by the payer.
    Chargedback,

    /// Any status this service does not know.
    Other(String),
}

impl PaymentStatus {
    /// Maps a vendor status string onto the shared vocabulary.
    pub fn from_vendor(status: &str) -> Self {
        match status.trim().to_lowercase().as_str() {
            "paid" => PaymentStatus::Paid,
            "pending" | "waiting_payment" | "processing" => PaymentStatus::Pending,
            "failed" | "refused" | "canceled" | "cancelled" => PaymentStatus::Failed,
            "refunded" => PaymentStatus::Refunded,
            "chargedback" | "chargeback" => PaymentStatus::Chargedback,
            other => PaymentStatus::Other(other.to_string()),
        }
    }

    /// Whether this status unlocks the school.
    pub fn is_paid(&self) -> bool {
        matches!(self, PaymentStatus::Paid)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
            PaymentStatus::Chargedback => "chargedback",
            PaymentStatus::Other(raw) => raw.as_str(),
        };
        f.write_str(s)
    }
}

/// How a payment points at the school that paid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriberRef {
    /// School id carried in vendor metadata.
    Direct(SchoolId),

    /// No metadata; match the payer email against school owner emails.
    PayerEmail(EmailAddress),
}

/// Vendor-neutral payment notification. Transient, never persisted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentEvent {
    /// Vendor that sent the webhook.
    pub vendor: PaymentVendor,

    /// Vendor event name (e.g. `order.paid`, `order_approved`).
    pub event_type: Option<String>,

    /// Vendor order id.
    pub reference: Option<String>,

    /// Reported payment status.
    pub status: PaymentStatus,

    /// School id from metadata, when the checkout carried one.
    pub school_id: Option<SchoolId>,

    /// Email of the payer.
    pub payer_email: Option<EmailAddress>,

    /// Amount charged, in cents.
    pub amount_cents: Option<i64>,
}

impl PaymentEvent {
    /// Creates an event with only the required fields set.
    pub fn new(vendor: PaymentVendor, status: PaymentStatus) -> Self {
        Self {
            vendor,
            event_type: None,
            reference: None,
            status,
            school_id: None,
            payer_email: None,
            amount_cents: None,
        }
    }

    /// Sets the school id from a raw metadata value.
    ///
    /// Blank values count as absent. Anything else must be a UUID.
    pub fn with_school_metadata(mut self, raw: Option<&str>) -> Result<Self, WebhookError> {
        self.school_id = match raw.map(str::trim).filter(|v| !v.is_empty()) {
            Some(value) => Some(
                SchoolId::parse(value)
                    .map_err(|e| WebhookError::InvalidMetadata(e.to_string()))?,
            ),
            None => None,
        };
        Ok(self)
    }

    /// Sets the payer email. Values that are not email addresses are dropped.
    pub fn with_payer_email(mut self, raw: Option<&str>) -> Self {
        self.payer_email = raw.and_then(|v| EmailAddress::new(v).ok());
        self
    }

    /// Picks the subscriber reference: metadata first, payer email second.
    pub fn subscriber(&self) -> Option<SubscriberRef> {
        if let Some(id) = self.school_id {
            return Some(SubscriberRef::Direct(id));
        }
        self.payer_email.clone().map(SubscriberRef::PayerEmail)
    }
}
