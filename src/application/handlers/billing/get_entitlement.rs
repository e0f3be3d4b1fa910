//! GetEntitlementHandler - Query handler for a school's access state.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::billing::BillingError;
use crate::domain::foundation::SchoolId;
use crate::ports::SchoolRepository;

/// Query for a school's entitlement as of a date.
#[derive(Debug, Clone)]
pub struct GetEntitlementQuery {
    pub school_id: SchoolId,
    pub today: NaiveDate,
}

/// Read model returned to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitlementView {
    pub school_id: SchoolId,
    pub active: bool,
    pub subscription_due_date: Option<NaiveDate>,
    pub has_access: bool,
    pub days_remaining: u32,
}

pub struct GetEntitlementHandler {
    schools: Arc<dyn SchoolRepository>,
}

impl GetEntitlementHandler {
    pub fn new(schools: Arc<dyn SchoolRepository>) -> Self {
        Self { schools }
    }

    pub async fn handle(&self, query: GetEntitlementQuery) -> Result<EntitlementView, BillingError> {
        let school = self
            .schools
            .find_by_id(&query.school_id)
            .await?
            .ok_or_else(|| BillingError::school_not_found(query.school_id))?;

        let entitlement = school.entitlement;
        Ok(EntitlementView {
            school_id: school.id,
            active: entitlement.active,
            subscription_due_date: entitlement.subscription_due_date,
            has_access: entitlement.grants_access_on(query.today),
            days_remaining: entitlement.days_remaining(query.today),
        })
    }
}
