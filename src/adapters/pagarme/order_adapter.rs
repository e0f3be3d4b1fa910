//! Pagar.me order adapter.
//!
//! Implements the `OrderGateway` port against `POST {base}/core/v5/orders`.
//! Authentication is HTTP Basic with the secret key as user and an empty
//! password.
//!
//! # Configuration
//!
//! ```ignore
//! let config = PagarmeConfig::new(secret_key);
//! let adapter = PagarmeOrderAdapter::new(config, reqwest::Client::new());
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::ports::{OrderError, OrderGateway, PixOrder, PixOrderRequest};

use super::wire_types::{
    CreateOrderBody, OrderItem, OrderPayment, PagarmeCustomer, PagarmeMetadata, PagarmeOrder,
    PixSettings,
};

/// Production API host.
pub const DEFAULT_API_BASE_URL: &str = "https://api.pagar.me";

const VENDOR_NAME: &str = "Pagar.me";

/// Pagar.me API configuration.
#[derive(Clone)]
pub struct PagarmeConfig {
    /// Secret key (sk_...).
    secret_key: SecretString,

    /// Base URL for the API (default: https://api.pagar.me).
    api_base_url: String,
}

impl PagarmeConfig {
    pub fn new(secret_key: SecretString) -> Self {
        Self {
            secret_key,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Set a custom API base URL (sandbox or tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    fn orders_url(&self) -> String {
        format!("{}/core/v5/orders", self.api_base_url)
    }
}

/// Pagar.me implementation of [`OrderGateway`].
pub struct PagarmeOrderAdapter {
    config: PagarmeConfig,
    http_client: reqwest::Client,
}

impl PagarmeOrderAdapter {
    pub fn new(config: PagarmeConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }
}

#[async_trait]
impl OrderGateway for PagarmeOrderAdapter {
    async fn create_pix_order(&self, request: PixOrderRequest) -> Result<PixOrder, OrderError> {
        let body = build_order_body(&request);

        let response = self
            .http_client
            .post(self.config.orders_url())
            .basic_auth(self.config.secret_key.expose_secret(), Some(""))
            .json(&body)
            .send()
            .await
            .map_err(|e| OrderError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                error = %error_text,
                "Pagar.me create order failed"
            );
            return Err(OrderError::Rejected {
                vendor: VENDOR_NAME,
                status: status.as_u16(),
                body: error_text,
            });
        }

        let order: PagarmeOrder = response.json().await.map_err(|e| {
            OrderError::InvalidResponse(format!("Failed to parse Pagar.me response: {}", e))
        })?;

        into_pix_order(order, request.amount_cents).map_err(|e| {
            tracing::error!(error = %e, "Pagar.me order issued no Pix code");
            e
        })
    }
}

/// Builds the v5 order body: one line item, Pix payment, school id metadata.
pub fn build_order_body(request: &PixOrderRequest) -> CreateOrderBody {
    CreateOrderBody {
        items: vec![OrderItem {
            amount: request.amount_cents,
            description: request.description.clone(),
            quantity: 1,
            code: request.item_code.clone(),
        }],
        customer: PagarmeCustomer {
            name: Some(request.customer_name.clone()),
            email: request.customer_email.as_ref().map(|e| e.as_str().to_string()),
        },
        payments: vec![OrderPayment {
            payment_method: "pix".to_string(),
            pix: PixSettings {
                expires_in: request.expires_in_secs,
            },
        }],
        metadata: PagarmeMetadata {
            school_id: Some(request.school_id.to_string()),
        },
    }
}

/// Extracts the Pix reference from the first charge's last transaction.
///
/// A `failed` order, or one whose transaction carries no `qr_code`, is an
/// error even though the vendor answered 2xx.
pub fn into_pix_order(order: PagarmeOrder, requested_amount: i64) -> Result<PixOrder, OrderError> {
    let status = order.status.unwrap_or_else(|| "pending".to_string());
    let transaction = order
        .charges
        .into_iter()
        .next()
        .and_then(|charge| charge.last_transaction);

    let issued = transaction
        .filter(|tx| tx.qr_code.as_deref().is_some_and(|code| !code.trim().is_empty()));

    match issued {
        Some(tx) if !status.eq_ignore_ascii_case("failed") => Ok(PixOrder {
            order_id: order.id,
            status,
            amount_cents: order.amount.unwrap_or(requested_amount),
            pix_code: tx.qr_code,
            qr_code_url: tx.qr_code_url,
            expires_at: tx.expires_at,
        }),
        _ => Err(OrderError::Failed {
            vendor: VENDOR_NAME,
            order_id: order.id,
            status,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{EmailAddress, SchoolId};

    fn request() -> PixOrderRequest {
        PixOrderRequest {
            school_id: SchoolId::new(),
            customer_name: "Escola Aurora".to_string(),
            customer_email: Some(EmailAddress::new("fin@aurora.com").unwrap()),
            amount_cents: 9990,
            description: "Mensalidade".to_string(),
            item_code: "monthly-subscription".to_string(),
            expires_in_secs: 3600,
        }
    }

    #[test]
    fn order_body_has_single_pix_item_and_metadata() {
        let req = request();
        let body = serde_json::to_value(build_order_body(&req)).unwrap();

        assert_eq!(body["items"].as_array().unwrap().len(), 1);
        assert_eq!(body["items"][0]["amount"], 9990);
        assert_eq!(body["items"][0]["quantity"], 1);
        assert_eq!(body["items"][0]["code"], "monthly-subscription");
        assert_eq!(body["payments"][0]["payment_method"], "pix");
        assert_eq!(body["payments"][0]["pix"]["expires_in"], 3600);
        assert_eq!(body["metadata"]["school_id"], req.school_id.to_string());
        assert_eq!(body["customer"]["email"], "fin@aurora.com");
    }

    #[test]
    fn order_body_omits_missing_customer_email() {
        let mut req = request();
        req.customer_email = None;
        let body = serde_json::to_value(build_order_body(&req)).unwrap();

        assert!(body["customer"].get("email").is_none());
    }

    #[test]
    fn pix_order_is_read_from_first_charge() {
        let order: PagarmeOrder = serde_json::from_str(
            r#"{
                "id": "or_1",
                "status": "pending",
                "amount": 9990,
                "charges": [{"last_transaction": {
                    "qr_code": "000201pix",
                    "qr_code_url": "https://qr.example/1.png",
                    "expires_at": "2024-03-01T11:00:00Z"
                }}]
            }"#,
        )
        .unwrap();

        let pix = into_pix_order(order, 9990).unwrap();

        assert_eq!(pix.order_id, "or_1");
        assert_eq!(pix.status, "pending");
        assert_eq!(pix.pix_code.as_deref(), Some("000201pix"));
        assert_eq!(pix.qr_code_url.as_deref(), Some("https://qr.example/1.png"));
        assert!(pix.expires_at.is_some());
    }

    #[test]
    fn missing_amount_falls_back_to_requested() {
        let order: PagarmeOrder = serde_json::from_str(
            r#"{"id": "or_3", "charges": [{"last_transaction": {"qr_code": "000201pix"}}]}"#,
        )
        .unwrap();

        let pix = into_pix_order(order, 4990).unwrap();

        assert_eq!(pix.amount_cents, 4990);
        assert_eq!(pix.status, "pending");
    }

    #[test]
    fn failed_order_is_an_error() {
        let order: PagarmeOrder = serde_json::from_str(
            r#"{
                "id": "or_9",
                "status": "failed",
                "charges": [{"status": "failed", "last_transaction": {"status": "failed"}}]
            }"#,
        )
        .unwrap();

        let err = into_pix_order(order, 9990).unwrap_err();

        assert_eq!(err.to_string(), "Pagar.me order or_9 failed: no Pix code issued");
    }

    #[test]
    fn order_without_pix_code_is_an_error() {
        let order: PagarmeOrder = serde_json::from_str(r#"{"id": "or_2", "status": "pending"}"#).unwrap();

        assert!(matches!(
            into_pix_order(order, 4990),
            Err(OrderError::Failed { status, .. }) if status == "pending"
        ));
    }

    #[test]
    fn failed_status_wins_over_stray_qr_code() {
        let order: PagarmeOrder = serde_json::from_str(
            r#"{"id": "or_4", "status": "failed", "charges": [{"last_transaction": {"qr_code": "000201pix"}}]}"#,
        )
        .unwrap();

        assert!(into_pix_order(order, 9990).is_err());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let config = PagarmeConfig::new(SecretString::new("sk_test".to_string()))
            .with_base_url("https://sandbox.example/");
        assert_eq!(config.orders_url(), "https://sandbox.example/core/v5/orders");
    }
}
