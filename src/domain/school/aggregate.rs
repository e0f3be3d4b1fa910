//! School aggregate - a tenant of the dashboard.
//!
//! Schools are created by provisioning outside this service. The only
//! mutation performed here is a renewal after a reconciled payment.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EmailAddress, SchoolId};

use super::Entitlement;

/// A school account.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `entitlement` follows the rules in [`Entitlement`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    /// Unique identifier for this school.
    pub id: SchoolId,

    /// Display name shown on the dashboard and sent as the vendor customer name.
    pub name: String,

    /// Owner contact email, used to match payers when metadata is missing.
    pub email: Option<EmailAddress>,

    /// Current access state.
    pub entitlement: Entitlement,
}

impl School {
    /// Creates a school that has not paid yet.
    pub fn new(id: SchoolId, name: impl Into<String>, email: Option<EmailAddress>) -> Self {
        Self {
            id,
            name: name.into(),
            email,
            entitlement: Entitlement::inactive(),
        }
    }

    /// Applies a payment reconciled on `today` and returns the new entitlement.
    pub fn renew(&mut self, today: NaiveDate) -> Entitlement {
        self.entitlement = Entitlement::renewed_on(today);
        self.entitlement
    }

    /// Whether the school may use the dashboard on the given date.
    pub fn has_access_on(&self, today: NaiveDate) -> bool {
        self.entitlement.grants_access_on(today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_school() -> School {
        School::new(
            SchoolId::new(),
            "Escola Primavera",
            Some(EmailAddress::new("financeiro@primavera.edu.br").unwrap()),
        )
    }

    #[test]
    fn new_school_has_no_access() {
        let school = test_school();
        assert!(!school.entitlement.active);
        assert!(!school.has_access_on(date(2026, 1, 1)));
    }

    #[test]
    fn renew_activates_school() {
        let mut school = test_school();
        let ent = school.renew(date(2026, 2, 1));

        assert!(ent.active);
        assert_eq!(ent.subscription_due_date, Some(date(2026, 3, 3)));
        assert_eq!(school.entitlement, ent);
        assert!(school.has_access_on(date(2026, 3, 3)));
    }

    #[test]
    fn renew_shortens_a_longer_prior_period() {
        let mut school = test_school();
        school.entitlement = Entitlement {
            active: true,
            subscription_due_date: Some(date(2026, 12, 31)),
        };

        school.renew(date(2026, 2, 1));

        assert_eq!(
            school.entitlement.subscription_due_date,
            Some(date(2026, 3, 3))
        );
    }

    proptest! {
        #[test]
        fn renewal_result_is_independent_of_prior_state(
            day_offset in 0i64..20_000,
            prior_offset in -400i64..400,
            prior_active in any::<bool>(),
            replays in 1usize..4,
        ) {
            let today = date(2000, 1, 1) + Duration::days(day_offset);

            let mut fresh = test_school();
            let expected = fresh.renew(today);

            let mut school = test_school();
            school.entitlement = Entitlement {
                active: prior_active,
                subscription_due_date: Some(today + Duration::days(prior_offset)),
            };
            for _ in 0..replays {
                school.renew(today);
            }

            prop_assert_eq!(school.entitlement, expected);
            prop_assert!(school.has_access_on(today));
        }
    }
}
