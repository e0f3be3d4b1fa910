//! EntitlementUpdater - the single write performed for a paid event.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::billing::WebhookError;
use crate::domain::foundation::SchoolId;
use crate::domain::school::Entitlement;
use crate::ports::{SchoolRepository, UpdateResult};

/// Marks a school active until `today + 30 days`.
pub struct EntitlementUpdater {
    schools: Arc<dyn SchoolRepository>,
}

impl EntitlementUpdater {
    pub fn new(schools: Arc<dyn SchoolRepository>) -> Self {
        Self { schools }
    }

    /// Writes the renewed entitlement and returns it.
    ///
    /// The value does not depend on the prior due date, so applying the same
    /// payment twice on one day leaves the row unchanged after the first write.
    pub async fn renew(
        &self,
        school_id: &SchoolId,
        today: NaiveDate,
    ) -> Result<Entitlement, WebhookError> {
        let entitlement = Entitlement::renewed_on(today);

        match self.schools.update_entitlement(school_id, &entitlement).await? {
            UpdateResult::Updated => Ok(entitlement),
            UpdateResult::NotFound => Err(WebhookError::SchoolNotFound(*school_id)),
        }
    }
}
