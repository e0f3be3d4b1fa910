//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum routes for webhooks, Pix orders, and entitlement queries
//! - `pagarme` - Pagar.me order API client and webhook decoder
//! - `kiwify` - Kiwify webhook decoder
//! - `postgres` - School and payment persistence
//! - `memory` - In-memory repositories for tests and local runs

pub mod http;
pub mod kiwify;
pub mod memory;
pub mod pagarme;
pub mod postgres;

pub use kiwify::KiwifyWebhookDecoder;
pub use memory::{InMemoryPaymentRecordRepository, InMemorySchoolRepository};
pub use pagarme::{MockOrderGateway, PagarmeOrderAdapter, PagarmeWebhookDecoder};
pub use postgres::{PostgresPaymentRecordRepository, PostgresSchoolRepository};
