//! Kiwify webhook decoding.

use crate::domain::billing::{PaymentEvent, PaymentStatus, PaymentVendor, WebhookError};
use crate::ports::WebhookDecoder;

use super::wire_types::KiwifyWebhook;

/// Decodes Kiwify order webhooks.
#[derive(Debug, Default, Clone, Copy)]
pub struct KiwifyWebhookDecoder;

impl KiwifyWebhookDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl WebhookDecoder for KiwifyWebhookDecoder {
    fn vendor(&self) -> PaymentVendor {
        PaymentVendor::Kiwify
    }

    fn decode(&self, payload: &[u8]) -> Result<PaymentEvent, WebhookError> {
        let hook: KiwifyWebhook =
            serde_json::from_slice(payload).map_err(|e| WebhookError::ParseError(e.to_string()))?;

        let status = hook
            .order_status
            .as_deref()
            .map(PaymentStatus::from_vendor)
            .ok_or(WebhookError::MissingField("order_status"))?;

        let mut event = PaymentEvent::new(self.vendor(), status)
            .with_school_metadata(hook.tracking.as_ref().and_then(|t| t.custom_id()))?
            .with_payer_email(hook.customer.as_ref().and_then(|c| c.email.as_deref()));

        event.event_type = hook.webhook_event_type;
        event.reference = hook.order_id;
        event.amount_cents = hook.commissions.and_then(|c| c.charge_amount);
        Ok(event)
    }
}
