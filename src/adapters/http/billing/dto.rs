//! HTTP DTOs (Data Transfer Objects) for billing endpoints.
//!
//! These types define the JSON request/response structure for the billing API.
//! They serve as the boundary between HTTP and the application layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::handlers::billing::{EntitlementView, ReconcilePaymentResult};
use crate::ports::PixOrder;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a Pix order.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePixOrderRequest {
    /// School paying the subscription.
    pub school_id: String,
    /// Overrides the monthly fee.
    #[serde(default)]
    pub amount_cents: Option<i64>,
}

/// Query string accepted by webhook endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookQuery {
    /// Shared token, required when one is configured.
    #[serde(default)]
    pub token: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response after a webhook was processed.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookAckResponse {
    pub received: bool,
    /// `renewed` or `acknowledged`.
    pub action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl From<ReconcilePaymentResult> for WebhookAckResponse {
    fn from(result: ReconcilePaymentResult) -> Self {
        match result {
            ReconcilePaymentResult::Renewed {
                school_id,
                entitlement,
                ..
            } => Self {
                received: true,
                action: "renewed",
                school_id: Some(school_id.to_string()),
                subscription_due_date: entitlement.subscription_due_date,
                status: None,
            },
            ReconcilePaymentResult::Acknowledged { status } => Self {
                received: true,
                action: "acknowledged",
                school_id: None,
                subscription_due_date: None,
                status: Some(status.to_string()),
            },
        }
    }
}

/// Response for a created Pix order.
#[derive(Debug, Clone, Serialize)]
pub struct PixOrderResponse {
    pub order_id: String,
    pub status: String,
    pub amount_cents: i64,
    /// Copy-paste Pix code.
    pub pix_code: Option<String>,
    pub qr_code_url: Option<String>,
    /// RFC 3339 timestamp.
    pub expires_at: Option<String>,
}

impl From<PixOrder> for PixOrderResponse {
    fn from(order: PixOrder) -> Self {
        Self {
            order_id: order.order_id,
            status: order.status,
            amount_cents: order.amount_cents,
            pix_code: order.pix_code,
            qr_code_url: order.qr_code_url,
            expires_at: order.expires_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Response for a school's entitlement.
#[derive(Debug, Clone, Serialize)]
pub struct EntitlementResponse {
    pub school_id: String,
    pub active: bool,
    pub subscription_due_date: Option<NaiveDate>,
    pub has_access: bool,
    pub days_remaining: u32,
}

impl From<EntitlementView> for EntitlementResponse {
    fn from(view: EntitlementView) -> Self {
        Self {
            school_id: view.school_id.to_string(),
            active: view.active,
            subscription_due_date: view.subscription_due_date,
            has_access: view.has_access,
            days_remaining: view.days_remaining,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::billing::PaymentStatus;
    use crate::domain::foundation::SchoolId;
    use crate::domain::school::Entitlement;

    #[test]
    fn renewed_ack_serializes_due_date() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let response = WebhookAckResponse::from(ReconcilePaymentResult::Renewed {
            school_id: SchoolId::new(),
            entitlement: Entitlement::renewed_on(today),
            vendor_reference: None,
        });

        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["action"], "renewed");
        assert_eq!(json["subscription_due_date"], "2024-03-31");
        assert!(json.get("status").is_none());
    }

    #[test]
    fn acknowledged_ack_carries_status() {
        let response = WebhookAckResponse::from(ReconcilePaymentResult::Acknowledged {
            status: PaymentStatus::Pending,
        });

        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["action"], "acknowledged");
        assert_eq!(json["status"], "pending");
        assert!(json.get("school_id").is_none());
    }

    #[test]
    fn create_order_request_amount_is_optional() {
        let req: CreatePixOrderRequest =
            serde_json::from_str(r#"{"school_id": "550e8400-e29b-41d4-a716-446655440000"}"#)
                .unwrap();
        assert_eq!(req.amount_cents, None);
    }
}
