//! PostgreSQL implementation of SchoolRepository.
//!
//! Reads and writes the externally owned `schools` table:
//!
//! | Column | Type |
//! |--------|------|
//! | id | uuid |
//! | name | text |
//! | email | text, nullable |
//! | active | boolean, nullable |
//! | subscription_due_date | date, nullable |

use crate::domain::foundation::{DomainError, ErrorCode, EmailAddress, SchoolId};
use crate::domain::school::{Entitlement, School};
use crate::ports::{SchoolRepository, UpdateResult};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL implementation of the SchoolRepository port.
pub struct PostgresSchoolRepository {
    pool: PgPool,
}

impl PostgresSchoolRepository {
    /// Creates a new PostgresSchoolRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a school.
#[derive(Debug, sqlx::FromRow)]
struct SchoolRow {
    id: Uuid,
    name: Option<String>,
    email: Option<String>,
    active: Option<bool>,
    subscription_due_date: Option<NaiveDate>,
}

impl From<SchoolRow> for School {
    fn from(row: SchoolRow) -> Self {
        School {
            id: SchoolId::from_uuid(row.id),
            name: row.name.unwrap_or_default(),
            // Rows are written by the dashboard; a malformed email just disables matching.
            email: row.email.and_then(|e| EmailAddress::new(e).ok()),
            entitlement: Entitlement {
                active: row.active.unwrap_or(false),
                subscription_due_date: row.subscription_due_date,
            },
        }
    }
}

fn db_error(action: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Failed to {}: {}", action, e))
}

#[async_trait]
impl SchoolRepository for PostgresSchoolRepository {
    async fn find_by_id(&self, id: &SchoolId) -> Result<Option<School>, DomainError> {
        let row: Option<SchoolRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, active, subscription_due_date
            FROM schools
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("find school", e))?;

        Ok(row.map(School::from))
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<School>, DomainError> {
        let row: Option<SchoolRow> = sqlx::query_as(
            r#"
            SELECT id, name, email, active, subscription_due_date
            FROM schools
            WHERE email = $1
            LIMIT 1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("find school by email", e))?;

        Ok(row.map(School::from))
    }

    async fn update_entitlement(
        &self,
        id: &SchoolId,
        entitlement: &Entitlement,
    ) -> Result<UpdateResult, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE schools SET
                active = $2,
                subscription_due_date = $3
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .bind(entitlement.active)
        .bind(entitlement.subscription_due_date)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("update school entitlement", e))?;

        if result.rows_affected() == 0 {
            return Ok(UpdateResult::NotFound);
        }

        Ok(UpdateResult::Updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_maps_to_school() {
        let id = Uuid::new_v4();
        let due = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let school = School::from(SchoolRow {
            id,
            name: Some("Escola Aurora".to_string()),
            email: Some("fin@aurora.com".to_string()),
            active: Some(true),
            subscription_due_date: Some(due),
        });

        assert_eq!(school.id, SchoolId::from_uuid(id));
        assert_eq!(school.email.unwrap().as_str(), "fin@aurora.com");
        assert!(school.entitlement.active);
        assert_eq!(school.entitlement.subscription_due_date, Some(due));
    }

    #[test]
    fn null_columns_map_to_inactive_school() {
        let school = School::from(SchoolRow {
            id: Uuid::new_v4(),
            name: None,
            email: Some("not an email".to_string()),
            active: None,
            subscription_due_date: None,
        });

        assert_eq!(school.name, "");
        assert_eq!(school.email, None);
        assert_eq!(school.entitlement, Entitlement::inactive());
    }
}
