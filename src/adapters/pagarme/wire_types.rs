//! Pagar.me v5 types as they appear on the wire.
//!
//! Only the fields this service reads are modeled; everything else in the
//! vendor JSON is ignored by serde.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// Webhooks
// ════════════════════════════════════════════════════════════════════════════════

/// Webhook envelope (`{"type": "order.paid", "data": {...}}`).
#[derive(Debug, Clone, Deserialize)]
pub struct PagarmeWebhookEvent {
    /// Hook id.
    #[serde(default)]
    pub id: Option<String>,

    /// Event name, e.g. `order.paid` or `charge.refunded`.
    #[serde(rename = "type", default)]
    pub event_type: Option<String>,

    pub data: Option<PagarmeWebhookData>,
}

/// Order or charge object carried by a webhook.
#[derive(Debug, Clone, Deserialize)]
pub struct PagarmeWebhookData {
    /// Order (or charge) id.
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    /// Amount in cents.
    #[serde(default)]
    pub amount: Option<i64>,

    #[serde(default)]
    pub customer: Option<PagarmeCustomer>,

    #[serde(default)]
    pub metadata: Option<PagarmeMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PagarmeCustomer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Order metadata. Pagar.me stores it as a flat string map.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PagarmeMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Orders
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /core/v5/orders`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderBody {
    pub items: Vec<OrderItem>,
    pub customer: PagarmeCustomer,
    pub payments: Vec<OrderPayment>,
    pub metadata: PagarmeMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderItem {
    pub amount: i64,
    pub description: String,
    pub quantity: u32,
    pub code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderPayment {
    pub payment_method: String,
    pub pix: PixSettings,
}

#[derive(Debug, Clone, Serialize)]
pub struct PixSettings {
    pub expires_in: u32,
}

/// Order as returned by the create call.
#[derive(Debug, Clone, Deserialize)]
pub struct PagarmeOrder {
    pub id: String,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub amount: Option<i64>,

    #[serde(default)]
    pub charges: Vec<PagarmeCharge>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PagarmeCharge {
    #[serde(default)]
    pub last_transaction: Option<PagarmeTransaction>,
}

/// Pix transaction details.
#[derive(Debug, Clone, Deserialize)]
pub struct PagarmeTransaction {
    /// Copy-paste Pix code.
    #[serde(default)]
    pub qr_code: Option<String>,

    #[serde(default)]
    pub qr_code_url: Option<String>,

    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_order_paid_webhook() {
        let json = r#"{
            "id": "hook_1",
            "type": "order.paid",
            "created_at": "2024-03-01T10:00:00Z",
            "data": {
                "id": "or_123",
                "code": "ABC",
                "status": "paid",
                "amount": 9990,
                "customer": {"id": "cus_1", "name": "Escola", "email": "fin@escola.com"},
                "metadata": {"school_id": "550e8400-e29b-41d4-a716-446655440000"}
            }
        }"#;

        let event: PagarmeWebhookEvent = serde_json::from_str(json).unwrap();
        let data = event.data.unwrap();

        assert_eq!(event.event_type.as_deref(), Some("order.paid"));
        assert_eq!(data.status.as_deref(), Some("paid"));
        assert_eq!(data.amount, Some(9990));
        assert_eq!(data.customer.unwrap().email.as_deref(), Some("fin@escola.com"));
        assert!(data.metadata.unwrap().school_id.is_some());
    }

    #[test]
    fn parses_order_response_with_pix_transaction() {
        let json = r#"{
            "id": "or_456",
            "status": "pending",
            "amount": 9990,
            "charges": [{
                "id": "ch_1",
                "last_transaction": {
                    "transaction_type": "pix",
                    "qr_code": "00020101021226820014br.gov.bcb.pix",
                    "qr_code_url": "https://api.pagar.me/core/v5/transactions/tran_1/qrcode",
                    "expires_at": "2024-03-01T11:00:00Z"
                }
            }]
        }"#;

        let order: PagarmeOrder = serde_json::from_str(json).unwrap();
        let tx = order.charges[0].last_transaction.as_ref().unwrap();

        assert_eq!(order.id, "or_456");
        assert!(tx.qr_code.as_deref().unwrap().contains("br.gov.bcb.pix"));
        assert!(tx.expires_at.is_some());
    }
}
