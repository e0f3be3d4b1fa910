//! Reconciliation planning - the pure decision behind every webhook.
//!
//! `plan_reconciliation` looks only at the decoded event. It never touches the
//! database, so the rules are testable without I/O:
//!
//! | Event | Plan |
//! |-------|------|
//! | status != paid | `Acknowledge` (200, no mutation) |
//! | paid, school id metadata | `Renew { Direct }` |
//! | paid, payer email only | `Renew { PayerEmail }` |
//! | paid, neither | `Err(UnresolvedSchool)` |

use super::{PaymentEvent, PaymentStatus, SubscriberRef, WebhookError};

/// What the webhook receiver should do with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconciliationPlan {
    /// Answer success without touching any school.
    Acknowledge { status: PaymentStatus },

    /// Resolve the subscriber and renew its entitlement.
    Renew { subscriber: SubscriberRef },
}

/// Decides how to handle a decoded payment event.
///
/// Refunds and chargebacks are acknowledged like any other non-paid status;
/// they do not revoke an entitlement already granted.
pub fn plan_reconciliation(event: &PaymentEvent) -> Result<ReconciliationPlan, WebhookError> {
    if !event.status.is_paid() {
        return Ok(ReconciliationPlan::Acknowledge {
            status: event.status.clone(),
        });
    }

    let subscriber = event.subscriber().ok_or(WebhookError::UnresolvedSchool)?;
    Ok(ReconciliationPlan::Renew { subscriber })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::billing::PaymentVendor;
    use crate::domain::foundation::{EmailAddress, SchoolId};

    fn paid_event() -> PaymentEvent {
        PaymentEvent::new(PaymentVendor::Pagarme, PaymentStatus::Paid)
    }

    #[test]
    fn non_paid_events_are_acknowledged() {
        for status in [
            PaymentStatus::Pending,
            PaymentStatus::Failed,
            PaymentStatus::Refunded,
            PaymentStatus::Chargedback,
            PaymentStatus::Other("under_review".to_string()),
        ] {
            let mut event = PaymentEvent::new(PaymentVendor::Kiwify, status.clone());
            event.school_id = Some(SchoolId::new());

            let plan = plan_reconciliation(&event).unwrap();

            assert_eq!(plan, ReconciliationPlan::Acknowledge { status });
        }
    }

    #[test]
    fn non_paid_without_subscriber_is_still_acknowledged() {
        let event = PaymentEvent::new(PaymentVendor::Kiwify, PaymentStatus::Pending);
        assert!(matches!(
            plan_reconciliation(&event),
            Ok(ReconciliationPlan::Acknowledge { .. })
        ));
    }

    #[test]
    fn paid_with_metadata_renews_directly() {
        let id = SchoolId::new();
        let mut event = paid_event();
        event.school_id = Some(id);

        let plan = plan_reconciliation(&event).unwrap();

        assert_eq!(
            plan,
            ReconciliationPlan::Renew {
                subscriber: SubscriberRef::Direct(id)
            }
        );
    }

    #[test]
    fn paid_with_email_only_renews_by_email() {
        let email = EmailAddress::new("secretaria@escola.com").unwrap();
        let mut event = paid_event();
        event.payer_email = Some(email.clone());

        let plan = plan_reconciliation(&event).unwrap();

        assert_eq!(
            plan,
            ReconciliationPlan::Renew {
                subscriber: SubscriberRef::PayerEmail(email)
            }
        );
    }

    #[test]
    fn paid_without_any_subscriber_fails_closed() {
        let result = plan_reconciliation(&paid_event());
        assert!(matches!(result, Err(WebhookError::UnresolvedSchool)));
    }
}
