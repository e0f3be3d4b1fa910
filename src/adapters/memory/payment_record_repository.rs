//! In-memory payment log.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::billing::PaymentRecord;
use crate::domain::foundation::DomainError;
use crate::ports::PaymentRecordRepository;

/// Payment records kept in a `Vec`, in insertion order.
#[derive(Default)]
pub struct InMemoryPaymentRecordRepository {
    records: RwLock<Vec<PaymentRecord>>,
}

impl InMemoryPaymentRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all stored records.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn records(&self) -> Vec<PaymentRecord> {
        self.records
            .read()
            .expect("InMemoryPaymentRecordRepository: records lock poisoned")
            .clone()
    }
}

#[async_trait]
impl PaymentRecordRepository for InMemoryPaymentRecordRepository {
    async fn record(&self, record: &PaymentRecord) -> Result<(), DomainError> {
        self.records
            .write()
            .map_err(|_| DomainError::database("in-memory payment log lock poisoned"))?
            .push(record.clone());
        Ok(())
    }
}
