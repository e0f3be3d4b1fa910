//! Pagar.me webhook decoding.
//!
//! Status comes from `data.status`; when a hook omits it, the suffix of the
//! event type is used (`order.paid` → `paid`).

use crate::domain::billing::{PaymentEvent, PaymentStatus, PaymentVendor, WebhookError};
use crate::ports::WebhookDecoder;

use super::wire_types::PagarmeWebhookEvent;

/// Decodes Pagar.me `order.*` and `charge.*` hooks.
#[derive(Debug, Default, Clone, Copy)]
pub struct PagarmeWebhookDecoder;

impl PagarmeWebhookDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl WebhookDecoder for PagarmeWebhookDecoder {
    fn vendor(&self) -> PaymentVendor {
        PaymentVendor::Pagarme
    }

    fn decode(&self, payload: &[u8]) -> Result<PaymentEvent, WebhookError> {
        let hook: PagarmeWebhookEvent =
            serde_json::from_slice(payload).map_err(|e| WebhookError::ParseError(e.to_string()))?;

        let data = hook.data.ok_or(WebhookError::MissingField("data"))?;

        let raw_status = data
            .status
            .as_deref()
            .or_else(|| {
                hook.event_type
                    .as_deref()
                    .and_then(|t| t.rsplit_once('.'))
                    .map(|(_, suffix)| suffix)
            })
            .ok_or(WebhookError::MissingField("data.status"))?;

        let mut event = PaymentEvent::new(self.vendor(), PaymentStatus::from_vendor(raw_status))
            .with_school_metadata(data.metadata.as_ref().and_then(|m| m.school_id.as_deref()))?
            .with_payer_email(data.customer.as_ref().and_then(|c| c.email.as_deref()));

        event.event_type = hook.event_type;
        event.reference = data.id;
        event.amount_cents = data.amount;
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SchoolId;

    const SCHOOL: &str = "550e8400-e29b-41d4-a716-446655440000";

    fn decode(json: &str) -> Result<PaymentEvent, WebhookError> {
        PagarmeWebhookDecoder::new().decode(json.as_bytes())
    }

    #[test]
    fn paid_order_with_metadata() {
        let event = decode(&format!(
            r#"{{"type":"order.paid","data":{{"id":"or_1","status":"paid","amount":9990,
                "customer":{{"email":"fin@escola.com"}},"metadata":{{"school_id":"{}"}}}}}}"#,
            SCHOOL
        ))
        .unwrap();

        assert_eq!(event.vendor, PaymentVendor::Pagarme);
        assert!(event.status.is_paid());
        assert_eq!(event.school_id, Some(SchoolId::parse(SCHOOL).unwrap()));
        assert_eq!(event.payer_email.unwrap().as_str(), "fin@escola.com");
        assert_eq!(event.reference.as_deref(), Some("or_1"));
        assert_eq!(event.amount_cents, Some(9990));
        assert_eq!(event.event_type.as_deref(), Some("order.paid"));
    }

    #[test]
    fn status_falls_back_to_event_type_suffix() {
        let event = decode(r#"{"type":"order.payment_failed","data":{"id":"or_2"}}"#).unwrap();
        assert_eq!(event.status, PaymentStatus::Other("payment_failed".to_string()));

        let event = decode(r#"{"type":"order.paid","data":{"id":"or_3"}}"#).unwrap();
        assert!(event.status.is_paid());
    }

    #[test]
    fn missing_status_and_type_is_rejected() {
        let result = decode(r#"{"data":{"id":"or_4"}}"#);
        assert!(matches!(result, Err(WebhookError::MissingField("data.status"))));
    }

    #[test]
    fn missing_data_is_rejected() {
        let result = decode(r#"{"type":"order.paid"}"#);
        assert!(matches!(result, Err(WebhookError::MissingField("data"))));
    }

    #[test]
    fn non_json_body_is_parse_error() {
        assert!(matches!(decode("not json"), Err(WebhookError::ParseError(_))));
    }

    #[test]
    fn malformed_school_metadata_is_invalid() {
        let result = decode(
            r#"{"type":"order.paid","data":{"status":"paid","metadata":{"school_id":"abc"}}}"#,
        );
        assert!(matches!(result, Err(WebhookError::InvalidMetadata(_))));
    }
}
