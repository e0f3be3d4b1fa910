//! HTTP handlers for billing endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.
//! Bodies are taken as raw bytes and parsed here so that malformed JSON gets the
//! same `{code, message}` error body as every other failure.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use crate::application::handlers::billing::{
    CreatePixOrderCommand, CreatePixOrderHandler, GetEntitlementHandler, GetEntitlementQuery,
    OrderPolicy, ReconcilePaymentCommand, ReconcilePaymentHandler,
};
use crate::domain::billing::{BillingError, WebhookError};
use crate::domain::foundation::SchoolId;
use crate::ports::{OrderGateway, PaymentRecordRepository, SchoolRepository, WebhookDecoder};

use super::dto::{
    CreatePixOrderRequest, EntitlementResponse, ErrorResponse, PixOrderResponse,
    WebhookAckResponse, WebhookQuery,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped dependencies
/// for efficient sharing across handlers.
#[derive(Clone)]
pub struct BillingAppState {
    pub school_repository: Arc<dyn SchoolRepository>,
    pub payment_records: Arc<dyn PaymentRecordRepository>,
    pub order_gateway: Arc<dyn OrderGateway>,
    pub pagarme_decoder: Arc<dyn WebhookDecoder>,
    pub kiwify_decoder: Arc<dyn WebhookDecoder>,
    pub order_policy: OrderPolicy,
    /// Shared secret expected in `?token=`. `None` leaves webhooks open.
    pub webhook_token: Option<SecretString>,
}

impl BillingAppState {
    /// Create handlers on demand from the shared state.
    pub fn reconcile_handler(&self, decoder: Arc<dyn WebhookDecoder>) -> ReconcilePaymentHandler {
        ReconcilePaymentHandler::new(
            decoder,
            self.school_repository.clone(),
            self.payment_records.clone(),
        )
    }

    pub fn create_pix_order_handler(&self) -> CreatePixOrderHandler {
        CreatePixOrderHandler::new(
            self.school_repository.clone(),
            self.order_gateway.clone(),
            self.payment_records.clone(),
            self.order_policy.clone(),
        )
    }

    pub fn get_entitlement_handler(&self) -> GetEntitlementHandler {
        GetEntitlementHandler::new(self.school_repository.clone())
    }

    /// Checks the `?token=` value in constant time.
    pub fn verify_webhook_token(&self, provided: Option<&str>) -> Result<(), WebhookError> {
        let Some(expected) = &self.webhook_token else {
            return Ok(());
        };
        let provided = provided.unwrap_or_default();
        let matches: bool = expected
            .expose_secret()
            .as_bytes()
            .ct_eq(provided.as_bytes())
            .into();
        if matches {
            Ok(())
        } else {
            Err(WebhookError::InvalidToken)
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Webhook Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/webhooks/pagarme - Reconcile a Pagar.me order webhook
pub async fn pagarme_webhook(
    State(state): State<BillingAppState>,
    Query(query): Query<WebhookQuery>,
    body: Bytes,
) -> Result<impl IntoResponse, BillingApiError> {
    let decoder = state.pagarme_decoder.clone();
    reconcile(&state, decoder, query, body).await
}

/// POST /api/webhooks/kiwify - Reconcile a Kiwify order webhook
pub async fn kiwify_webhook(
    State(state): State<BillingAppState>,
    Query(query): Query<WebhookQuery>,
    body: Bytes,
) -> Result<impl IntoResponse, BillingApiError> {
    let decoder = state.kiwify_decoder.clone();
    reconcile(&state, decoder, query, body).await
}

async fn reconcile(
    state: &BillingAppState,
    decoder: Arc<dyn WebhookDecoder>,
    query: WebhookQuery,
    body: Bytes,
) -> Result<Json<WebhookAckResponse>, BillingApiError> {
    if let Err(e) = state.verify_webhook_token(query.token.as_deref()) {
        tracing::warn!(vendor = %decoder.vendor(), "Webhook rejected: invalid token");
        return Err(e.into());
    }

    let handler = state.reconcile_handler(decoder);
    let cmd = ReconcilePaymentCommand {
        payload: body.to_vec(),
        received_on: Utc::now().date_naive(),
    };

    let result = handler.handle(cmd).await.map_err(|e| {
        tracing::error!(vendor = %handler.vendor(), error = %e, "Webhook reconciliation failed");
        e
    })?;

    Ok(Json(WebhookAckResponse::from(result)))
}

/// OPTIONS preflight for every browser-facing POST route.
///
/// CORS headers are added by the router's CORS layer.
pub async fn preflight() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

// ════════════════════════════════════════════════════════════════════════════════
// Order and Query Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/billing/pix-orders - Create a Pix order at Pagar.me
pub async fn create_pix_order(
    State(state): State<BillingAppState>,
    body: Bytes,
) -> Result<impl IntoResponse, BillingApiError> {
    let request: CreatePixOrderRequest = serde_json::from_slice(&body)
        .map_err(|e| BillingError::validation("body", e.to_string()))?;
    let school_id = SchoolId::parse(&request.school_id).map_err(BillingError::from)?;

    let handler = state.create_pix_order_handler();
    let cmd = CreatePixOrderCommand {
        school_id,
        amount_cents: request.amount_cents,
    };

    let order = handler.handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(PixOrderResponse::from(order))))
}

/// GET /api/schools/:id/entitlement - Current access state of a school
pub async fn get_entitlement(
    State(state): State<BillingAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, BillingApiError> {
    let school_id = SchoolId::parse(&id).map_err(BillingError::from)?;

    let handler = state.get_entitlement_handler();
    let query = GetEntitlementQuery {
        school_id,
        today: Utc::now().date_naive(),
    };

    let view = handler.handle(query).await?;

    Ok(Json(EntitlementResponse::from(view)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts application errors to HTTP responses.
#[derive(Debug)]
pub enum BillingApiError {
    Webhook(WebhookError),
    Billing(BillingError),
}

impl From<WebhookError> for BillingApiError {
    fn from(err: WebhookError) -> Self {
        Self::Webhook(err)
    }
}

impl From<BillingError> for BillingApiError {
    fn from(err: BillingError) -> Self {
        Self::Billing(err)
    }
}

impl IntoResponse for BillingApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match &self {
            BillingApiError::Webhook(err) => (
                err.status_code(),
                ErrorResponse::new(err.code(), err.to_string()),
            ),
            // Vendor and database failures are relayed to the caller as 400.
            BillingApiError::Billing(err) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(err.code().to_string(), err.message()),
            ),
        };
        (status, Json(body)).into_response()
    }
}
