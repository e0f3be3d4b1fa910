//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresSchoolRepository` - School lookup and entitlement writes
//! - `PostgresPaymentRecordRepository` - Append-only payment log

mod payment_record_repository;
mod school_repository;

pub use payment_record_repository::PostgresPaymentRecordRepository;
pub use school_repository::PostgresSchoolRepository;
