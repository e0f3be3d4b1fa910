//! School repository port.
//!
//! The `schools` table is owned by the dashboard; this service reads the
//! owner contact and writes only the entitlement columns.
//!
//! # Design
//!
//! - **Single-row lookups**: email matching is exact, so at most one school
//! - **Unconditional update**: entitlement values are absolute, last write wins

use crate::domain::foundation::{DomainError, EmailAddress, SchoolId};
use crate::domain::school::{Entitlement, School};
use async_trait::async_trait;

/// Outcome of an entitlement update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateResult {
    /// One row changed.
    Updated,

    /// No school with the given id.
    NotFound,
}

/// Repository port for school rows.
#[async_trait]
pub trait SchoolRepository: Send + Sync {
    /// Find a school by id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SchoolId) -> Result<Option<School>, DomainError>;

    /// Find the school whose owner email equals `email` exactly.
    ///
    /// Returns `None` if no school uses this email.
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<School>, DomainError>;

    /// Overwrite the entitlement columns of a school.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn update_entitlement(
        &self,
        id: &SchoolId,
        entitlement: &Entitlement,
    ) -> Result<UpdateResult, DomainError>;
}
