//! Axum router configuration for billing endpoints.
//!
//! This module defines the route structure for billing-related API endpoints
//! and wires them to their corresponding handlers.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_pix_order, get_entitlement, kiwify_webhook, pagarme_webhook, preflight,
    BillingAppState,
};

/// Create the vendor webhook router.
///
/// Webhooks carry no user authentication; an optional shared token is
/// checked by the handlers.
///
/// # Routes
/// - `POST /pagarme` - Pagar.me order webhooks
/// - `POST /kiwify` - Kiwify order webhooks
pub fn webhook_routes() -> Router<BillingAppState> {
    Router::new()
        .route("/pagarme", post(pagarme_webhook).options(preflight))
        .route("/kiwify", post(kiwify_webhook).options(preflight))
}

/// Create the order router.
///
/// # Routes
/// - `POST /pix-orders` - Create a Pix order
pub fn order_routes() -> Router<BillingAppState> {
    Router::new().route("/pix-orders", post(create_pix_order).options(preflight))
}

/// Create the school query router.
///
/// # Routes
/// - `GET /:id/entitlement` - Current access state
pub fn school_routes() -> Router<BillingAppState> {
    Router::new().route("/:id/entitlement", get(get_entitlement))
}

/// Create the complete billing module router.
///
/// # Example
///
/// ```ignore
/// let app = Router::new()
///     .nest("/api", billing_router())
///     .with_state(app_state);
/// ```
pub fn billing_router() -> Router<BillingAppState> {
    Router::new()
        .nest("/webhooks", webhook_routes())
        .nest("/billing", order_routes())
        .nest("/schools", school_routes())
}
