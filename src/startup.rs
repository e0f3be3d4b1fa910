//! Application startup and lifecycle management.
//!
//! Wires configuration into adapters, builds the HTTP router, and runs the
//! server until Ctrl-C or SIGTERM.

use std::sync::Arc;

use axum::http::{header, HeaderName, HeaderValue, Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::adapters::http::{billing_router, BillingAppState};
use crate::adapters::kiwify::KiwifyWebhookDecoder;
use crate::adapters::pagarme::{PagarmeConfig, PagarmeOrderAdapter, PagarmeWebhookDecoder};
use crate::adapters::postgres::{PostgresPaymentRecordRepository, PostgresSchoolRepository};
use crate::application::OrderPolicy;
use crate::config::{AppConfig, CorsOrigins, PaymentConfig, ServerConfig};

/// Health check endpoint for liveness probes.
async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "school-billing",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Order terms taken from payment configuration.
pub fn order_policy(payment: &PaymentConfig) -> OrderPolicy {
    OrderPolicy {
        monthly_fee_cents: payment.monthly_fee_cents,
        expires_in_secs: payment.pix_expires_in_secs,
        description: payment.order_description.clone(),
    }
}

/// CORS for the dashboard: any origin unless `server.cors_origins` lists some.
pub fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let allow_origin = match server.cors_origins() {
        CorsOrigins::Any => AllowOrigin::from(Any),
        CorsOrigins::List(origins) => AllowOrigin::list(origins.into_iter().filter_map(|origin| {
            HeaderValue::from_str(&origin)
                .map_err(|_| tracing::warn!(origin = %origin, "Ignoring invalid CORS origin"))
                .ok()
        })),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ])
}

/// Full HTTP router: health check, billing API under `/api`, and middleware.
pub fn build_router(state: BillingAppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", billing_router())
        .with_state(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: AppConfig) -> anyhow::Result<Self> {
        let pool = config
            .database
            .pool_options()
            .connect(&config.database.url)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to connect to PostgreSQL");
                e
            })?;

        let http_client = reqwest::Client::builder()
            .timeout(config.payment.vendor_timeout())
            .build()?;

        let pagarme = PagarmeConfig::new(config.payment.pagarme_secret_key.clone())
            .with_base_url(config.payment.pagarme_api_base_url.clone());

        if config.payment.webhook_token.is_none() {
            tracing::warn!("No webhook token configured - webhook endpoints are open");
        }

        let state = BillingAppState {
            school_repository: Arc::new(PostgresSchoolRepository::new(pool.clone())),
            payment_records: Arc::new(PostgresPaymentRecordRepository::new(pool)),
            order_gateway: Arc::new(PagarmeOrderAdapter::new(pagarme, http_client)),
            pagarme_decoder: Arc::new(PagarmeWebhookDecoder::new()),
            kiwify_decoder: Arc::new(KiwifyWebhookDecoder::new()),
            order_policy: order_policy(&config.payment),
            webhook_token: config.payment.webhook_token.clone(),
        };

        let router = build_router(state, &config.server);

        let addr = config.server.socket_addr()?;
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!(%addr, error = %e, "Failed to bind HTTP listener");
            e
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            port,
            environment = ?config.server.environment,
            test_mode = config.payment.is_test_mode(),
            "School billing service listening"
        );

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Service shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    #[test]
    fn order_policy_follows_payment_config() {
        let payment = PaymentConfig {
            pagarme_secret_key: SecretString::new("sk_test_x".to_string()),
            monthly_fee_cents: 14990,
            pix_expires_in_secs: 1800,
            ..Default::default()
        };

        let policy = order_policy(&payment);

        assert_eq!(policy.monthly_fee_cents, 14990);
        assert_eq!(policy.expires_in_secs, 1800);
        assert_eq!(policy.description, payment.order_description);
    }
}
