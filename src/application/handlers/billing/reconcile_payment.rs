//! ReconcilePaymentHandler - Command handler for vendor payment webhooks.
//!
//! Flow: decode → plan → resolve subscriber → renew entitlement → record.
//! A non-`paid` status stops after planning and is acknowledged so the
//! vendor does not retry.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::billing::{
    plan_reconciliation, PaymentRecord, PaymentStatus, PaymentVendor, ReconciliationPlan,
    WebhookError,
};
use crate::domain::foundation::SchoolId;
use crate::domain::school::Entitlement;
use crate::ports::{PaymentRecordRepository, SchoolRepository, WebhookDecoder};

use super::{EntitlementUpdater, SubscriberResolver};

/// Command to reconcile one webhook delivery.
#[derive(Debug, Clone)]
pub struct ReconcilePaymentCommand {
    /// Raw webhook body.
    pub payload: Vec<u8>,
    /// Calendar date the renewal window starts from (UTC today in production).
    pub received_on: NaiveDate,
}

/// Result of reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcilePaymentResult {
    /// Paid event applied to a school.
    Renewed {
        school_id: SchoolId,
        entitlement: Entitlement,
        vendor_reference: Option<String>,
    },
    /// Event accepted without any mutation.
    Acknowledged { status: PaymentStatus },
}

/// Handler for one vendor's payment webhooks.
pub struct ReconcilePaymentHandler {
    decoder: Arc<dyn WebhookDecoder>,
    resolver: SubscriberResolver,
    updater: EntitlementUpdater,
    payments: Arc<dyn PaymentRecordRepository>,
}

impl ReconcilePaymentHandler {
    pub fn new(
        decoder: Arc<dyn WebhookDecoder>,
        schools: Arc<dyn SchoolRepository>,
        payments: Arc<dyn PaymentRecordRepository>,
    ) -> Self {
        Self {
            decoder,
            resolver: SubscriberResolver::new(schools.clone()),
            updater: EntitlementUpdater::new(schools),
            payments,
        }
    }

    pub fn vendor(&self) -> PaymentVendor {
        self.decoder.vendor()
    }

    pub async fn handle(
        &self,
        cmd: ReconcilePaymentCommand,
    ) -> Result<ReconcilePaymentResult, WebhookError> {
        let vendor = self.decoder.vendor();
        tracing::info!(
            vendor = %vendor,
            payload = %String::from_utf8_lossy(&cmd.payload),
            "Payment webhook received"
        );

        let event = self.decoder.decode(&cmd.payload)?;

        let subscriber = match plan_reconciliation(&event)? {
            ReconciliationPlan::Acknowledge { status } => {
                tracing::info!(
                    vendor = %vendor,
                    status = %status,
                    reference = ?event.reference,
                    "Non-paid status acknowledged without changes"
                );
                return Ok(ReconcilePaymentResult::Acknowledged { status });
            }
            ReconciliationPlan::Renew { subscriber } => subscriber,
        };

        let school_id = self.resolver.resolve(&subscriber).await?;
        let entitlement = self.updater.renew(&school_id, cmd.received_on).await?;

        tracing::info!(
            vendor = %vendor,
            school_id = %school_id,
            due_date = ?entitlement.subscription_due_date,
            "School subscription renewed"
        );

        let record = PaymentRecord::paid(school_id, &event);
        if let Err(e) = self.payments.record(&record).await {
            tracing::warn!(
                vendor = %vendor,
                school_id = %school_id,
                error = %e,
                "Failed to store payment record"
            );
        }

        Ok(ReconcilePaymentResult::Renewed {
            school_id,
            entitlement,
            vendor_reference: event.reference,
        })
    }
}
