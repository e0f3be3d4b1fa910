//! Pagar.me payment vendor adapter.
//!
//! - `PagarmeOrderAdapter` implements `OrderGateway` (Pix orders, v5 API)
//! - `PagarmeWebhookDecoder` implements `WebhookDecoder`
//! - `MockOrderGateway` stands in for the vendor in tests and local runs
//!
//! # Configuration
//!
//! - `SCHOOL_BILLING__PAYMENT__PAGARME_SECRET_KEY`: secret API key
//! - `SCHOOL_BILLING__PAYMENT__PAGARME_API_BASE_URL`: optional host override

mod mock_order_gateway;
mod order_adapter;
mod webhook_decoder;
mod wire_types;

pub use mock_order_gateway::MockOrderGateway;
pub use order_adapter::{
    build_order_body, into_pix_order, PagarmeConfig, PagarmeOrderAdapter, DEFAULT_API_BASE_URL,
};
pub use webhook_decoder::PagarmeWebhookDecoder;
pub use wire_types::{CreateOrderBody, PagarmeOrder, PagarmeWebhookEvent};
