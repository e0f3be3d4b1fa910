//! PostgreSQL implementation of PaymentRecordRepository.
//!
//! Appends to the externally owned `payments` table.

use crate::domain::billing::PaymentRecord;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::PaymentRecordRepository;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresPaymentRecordRepository {
    pool: PgPool,
}

impl PostgresPaymentRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRecordRepository for PostgresPaymentRecordRepository {
    async fn record(&self, record: &PaymentRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO payments (
                id, school_id, provider, provider_reference, amount_cents, status, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(record.school_id.as_uuid())
        .bind(record.vendor.as_str())
        .bind(&record.vendor_reference)
        .bind(record.amount_cents)
        .bind(record.status.as_str())
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to save payment: {}", e))
        })?;

        Ok(())
    }
}
