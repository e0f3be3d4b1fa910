//! In-memory school store for local development and tests.
//!
//! # Panics
//!
//! Test helpers panic if the internal lock is poisoned. Port methods report
//! a poisoned lock as a `DatabaseError` instead.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, EmailAddress, SchoolId};
use crate::domain::school::{Entitlement, School};
use crate::ports::{SchoolRepository, UpdateResult};

/// School table kept in a `HashMap`.
///
/// # Example
///
/// ```ignore
/// let repo = InMemorySchoolRepository::with_schools(vec![school]);
/// repo.update_entitlement(&id, &Entitlement::renewed_on(today)).await?;
/// assert_eq!(repo.update_count(), 1);
/// ```
#[derive(Default)]
pub struct InMemorySchoolRepository {
    schools: RwLock<HashMap<SchoolId, School>>,
    updates: RwLock<Vec<SchoolId>>,
}

impl InMemorySchoolRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the given schools.
    pub fn with_schools(schools: Vec<School>) -> Self {
        let map = schools.into_iter().map(|s| (s.id, s)).collect();
        Self {
            schools: RwLock::new(map),
            updates: RwLock::new(Vec::new()),
        }
    }

    // === Test Helpers ===

    /// Adds or replaces a school.
    pub fn insert(&self, school: School) {
        self.schools
            .write()
            .expect("InMemorySchoolRepository: schools lock poisoned")
            .insert(school.id, school);
    }

    /// Returns a snapshot of one school.
    pub fn get(&self, id: &SchoolId) -> Option<School> {
        self.schools
            .read()
            .expect("InMemorySchoolRepository: schools lock poisoned")
            .get(id)
            .cloned()
    }

    /// Number of entitlement writes that hit a row.
    pub fn update_count(&self) -> usize {
        self.updates
            .read()
            .expect("InMemorySchoolRepository: updates lock poisoned")
            .len()
    }
}

fn poisoned() -> DomainError {
    DomainError::database("in-memory school store lock poisoned")
}

#[async_trait]
impl SchoolRepository for InMemorySchoolRepository {
    async fn find_by_id(&self, id: &SchoolId) -> Result<Option<School>, DomainError> {
        let schools = self.schools.read().map_err(|_| poisoned())?;
        Ok(schools.get(id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<School>, DomainError> {
        let schools = self.schools.read().map_err(|_| poisoned())?;
        Ok(schools
            .values()
            .find(|s| s.email.as_ref() == Some(email))
            .cloned())
    }

    async fn update_entitlement(
        &self,
        id: &SchoolId,
        entitlement: &Entitlement,
    ) -> Result<UpdateResult, DomainError> {
        let mut schools = self.schools.write().map_err(|_| poisoned())?;
        match schools.get_mut(id) {
            Some(school) => {
                school.entitlement = *entitlement;
                self.updates.write().map_err(|_| poisoned())?.push(*id);
                Ok(UpdateResult::Updated)
            }
            None => Ok(UpdateResult::NotFound),
        }
    }
}
