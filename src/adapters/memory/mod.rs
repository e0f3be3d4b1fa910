//! In-memory adapters for local development and tests.

mod payment_record_repository;
mod school_repository;

pub use payment_record_repository::InMemoryPaymentRecordRepository;
pub use school_repository::InMemorySchoolRepository;
