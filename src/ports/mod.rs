//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `SchoolRepository` - Tenant lookup and entitlement writes
//! - `PaymentRecordRepository` - Append-only payment log
//!
//! ## Vendor Ports
//!
//! - `WebhookDecoder` - Vendor envelope to `PaymentEvent`
//! - `OrderGateway` - Pix order creation

mod order_gateway;
mod payment_record_repository;
mod school_repository;
mod webhook_decoder;

pub use order_gateway::{OrderError, OrderGateway, PixOrder, PixOrderRequest};
pub use payment_record_repository::PaymentRecordRepository;
pub use school_repository::{SchoolRepository, UpdateResult};
pub use webhook_decoder::WebhookDecoder;
