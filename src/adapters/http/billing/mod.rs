//! HTTP adapter for billing endpoints.
//!
//! Exposes the billing domain via REST API:
//! - `POST /api/webhooks/pagarme` - Pagar.me payment webhooks
//! - `POST /api/webhooks/kiwify` - Kiwify payment webhooks
//! - `POST /api/billing/pix-orders` - Create a Pix order
//! - `GET /api/schools/:id/entitlement` - Current access state of a school

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{BillingApiError, BillingAppState};
pub use routes::billing_router;
