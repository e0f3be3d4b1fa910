//! Entitlement value object - the active/expiry state that grants dashboard access.
//!
//! Renewal is flat, not cumulative: the new due date is always computed from
//! the reconciliation date, never from the previous due date. Two `paid`
//! events on the same day therefore produce the same entitlement.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Length of one paid subscription period.
pub const RENEWAL_WINDOW_DAYS: u64 = 30;

/// Access state of a school.
///
/// # Invariants
///
/// - `active == true` after a renewal implies `subscription_due_date >= renewal date`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entitlement {
    /// Whether the school is unlocked.
    pub active: bool,

    /// Last day covered by the current payment. `None` before the first payment.
    pub subscription_due_date: Option<NaiveDate>,
}

impl Entitlement {
    /// Entitlement granted by a payment reconciled on `today`.
    pub fn renewed_on(today: NaiveDate) -> Self {
        Self {
            active: true,
            subscription_due_date: Some(today + Days::new(RENEWAL_WINDOW_DAYS)),
        }
    }

    /// Entitlement of a school that never paid.
    pub fn inactive() -> Self {
        Self {
            active: false,
            subscription_due_date: None,
        }
    }

    /// Whether this entitlement grants access on the given date.
    ///
    /// Schools activated by provisioning without a due date keep access
    /// while `active` is set.
    pub fn grants_access_on(&self, today: NaiveDate) -> bool {
        self.active
            && self
                .subscription_due_date
                .map_or(true, |due| due >= today)
    }

    /// Whole days left until the due date (0 once it has passed or when unset).
    pub fn days_remaining(&self, today: NaiveDate) -> u32 {
        match self.subscription_due_date {
            Some(due) if due > today => {
                u32::try_from((due - today).num_days()).unwrap_or(u32::MAX)
            }
            _ => 0,
        }
    }
}
