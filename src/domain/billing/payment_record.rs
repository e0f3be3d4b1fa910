//! Payment record - one row of the `payments` table.
//!
//! Money is stored as i64 cents, never floats.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PaymentRecordId, SchoolId};

use super::{PaymentEvent, PaymentVendor};

/// Lifecycle of a payment row as written by this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentRecordStatus {
    /// Order created at the vendor, not paid yet.
    Pending,

    /// Payment confirmed by a webhook.
    Paid,
}

impl PaymentRecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentRecordStatus::Pending => "pending",
            PaymentRecordStatus::Paid => "paid",
        }
    }
}

/// A payment attempt or confirmation tied to a school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: PaymentRecordId,
    pub school_id: SchoolId,
    pub vendor: PaymentVendor,
    /// Vendor order id.
    pub vendor_reference: Option<String>,
    pub amount_cents: Option<i64>,
    pub status: PaymentRecordStatus,
    pub created_at: DateTime<Utc>,
}

impl PaymentRecord {
    /// Record for an order just created at the vendor.
    pub fn pending_order(
        school_id: SchoolId,
        vendor: PaymentVendor,
        vendor_reference: impl Into<String>,
        amount_cents: i64,
    ) -> Self {
        Self {
            id: PaymentRecordId::new(),
            school_id,
            vendor,
            vendor_reference: Some(vendor_reference.into()),
            amount_cents: Some(amount_cents),
            status: PaymentRecordStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Record for a `paid` event reconciled against a school.
    pub fn paid(school_id: SchoolId, event: &PaymentEvent) -> Self {
        Self {
            id: PaymentRecordId::new(),
            school_id,
            vendor: event.vendor,
            vendor_reference: event.reference.clone(),
            amount_cents: event.amount_cents,
            status: PaymentRecordStatus::Paid,
            created_at: Utc::now(),
        }
    }
}
