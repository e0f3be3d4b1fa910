//! Payment record repository port (append-only `payments` table).

use crate::domain::billing::PaymentRecord;
use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// Append-only store for payment records.
#[async_trait]
pub trait PaymentRecordRepository: Send + Sync {
    /// Insert a record.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn record(&self, record: &PaymentRecord) -> Result<(), DomainError>;
}
