//! Kiwify webhook payload as it appears on the wire.
//!
//! Kiwify uses PascalCase for nested objects and snake_case for top-level
//! fields. Amounts may arrive as numbers or numeric strings.

use serde::{Deserialize, Deserializer};

/// Order webhook (`order_approved`, `order_refunded`, `chargeback`, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct KiwifyWebhook {
    #[serde(default)]
    pub order_id: Option<String>,

    #[serde(default)]
    pub order_status: Option<String>,

    #[serde(default)]
    pub webhook_event_type: Option<String>,

    #[serde(rename = "Customer", default)]
    pub customer: Option<KiwifyCustomer>,

    #[serde(rename = "Commissions", default)]
    pub commissions: Option<KiwifyCommissions>,

    #[serde(rename = "TrackingParameters", default)]
    pub tracking: Option<KiwifyTracking>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KiwifyCustomer {
    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KiwifyCommissions {
    /// Amount charged to the buyer, in cents.
    #[serde(default, deserialize_with = "cents")]
    pub charge_amount: Option<i64>,
}

/// Checkout tracking parameters. The checkout link carries the school id in
/// `s1`, or in `sck` for older links.
#[derive(Debug, Clone, Deserialize)]
pub struct KiwifyTracking {
    #[serde(default)]
    pub s1: Option<String>,

    #[serde(default)]
    pub sck: Option<String>,
}

impl KiwifyTracking {
    /// First non-blank custom id.
    pub fn custom_id(&self) -> Option<&str> {
        [self.s1.as_deref(), self.sck.as_deref()]
            .into_iter()
            .flatten()
            .find(|v| !v.trim().is_empty())
    }
}

fn cents<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_i64(),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_approved_order() {
        let json = r#"{
            "order_id": "kw-001",
            "order_ref": "AbC12",
            "order_status": "paid",
            "payment_method": "pix",
            "webhook_event_type": "order_approved",
            "Customer": {"full_name": "Maria Souza", "email": "maria@escola.com"},
            "Commissions": {"charge_amount": "9990", "currency": "BRL"},
            "TrackingParameters": {"src": null, "sck": null, "s1": "550e8400-e29b-41d4-a716-446655440000"}
        }"#;

        let hook: KiwifyWebhook = serde_json::from_str(json).unwrap();

        assert_eq!(hook.order_status.as_deref(), Some("paid"));
        assert_eq!(hook.commissions.unwrap().charge_amount, Some(9990));
        assert_eq!(
            hook.tracking.unwrap().custom_id(),
            Some("550e8400-e29b-41d4-a716-446655440000")
        );
    }

    #[test]
    fn numeric_charge_amount_is_accepted() {
        let c: KiwifyCommissions = serde_json::from_str(r#"{"charge_amount": 4990}"#).unwrap();
        assert_eq!(c.charge_amount, Some(4990));
    }

    #[test]
    fn custom_id_falls_back_to_sck() {
        let t: KiwifyTracking = serde_json::from_str(r#"{"s1": "", "sck": "abc"}"#).unwrap();
        assert_eq!(t.custom_id(), Some("abc"));
    }
}
