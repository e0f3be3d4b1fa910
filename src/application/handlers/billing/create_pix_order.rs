//! CreatePixOrderHandler - Command handler for Pix order creation.

use std::sync::Arc;

use crate::domain::billing::{BillingError, PaymentRecord, PaymentVendor};
use crate::domain::foundation::{SchoolId, ValidationError};
use crate::ports::{OrderGateway, PaymentRecordRepository, PixOrder, PixOrderRequest, SchoolRepository};

/// Line item code sent with every subscription order.
pub const SUBSCRIPTION_ITEM_CODE: &str = "monthly-subscription";

/// Command to create a Pix order for a school.
#[derive(Debug, Clone)]
pub struct CreatePixOrderCommand {
    pub school_id: SchoolId,
    /// Overrides the monthly fee when present.
    pub amount_cents: Option<i64>,
}

/// Fixed order terms, read from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderPolicy {
    pub monthly_fee_cents: i64,
    pub expires_in_secs: u32,
    pub description: String,
}

impl Default for OrderPolicy {
    fn default() -> Self {
        Self {
            monthly_fee_cents: 9990,
            expires_in_secs: 3600,
            description: "Mensalidade do sistema escolar".to_string(),
        }
    }
}

impl OrderPolicy {
    /// Amount to charge: the override verbatim, or the monthly fee.
    pub fn amount_for(&self, requested: Option<i64>) -> Result<i64, ValidationError> {
        match requested {
            Some(amount) if amount <= 0 => Err(ValidationError::not_positive("amount_cents", amount)),
            Some(amount) => Ok(amount),
            None => Ok(self.monthly_fee_cents),
        }
    }
}

/// Handler for creating Pix orders at the vendor.
pub struct CreatePixOrderHandler {
    schools: Arc<dyn SchoolRepository>,
    gateway: Arc<dyn OrderGateway>,
    payments: Arc<dyn PaymentRecordRepository>,
    policy: OrderPolicy,
}

impl CreatePixOrderHandler {
    pub fn new(
        schools: Arc<dyn SchoolRepository>,
        gateway: Arc<dyn OrderGateway>,
        payments: Arc<dyn PaymentRecordRepository>,
        policy: OrderPolicy,
    ) -> Self {
        Self {
            schools,
            gateway,
            payments,
            policy,
        }
    }

    pub async fn handle(&self, cmd: CreatePixOrderCommand) -> Result<PixOrder, BillingError> {
        let amount_cents = self.policy.amount_for(cmd.amount_cents)?;

        let school = self
            .schools
            .find_by_id(&cmd.school_id)
            .await?
            .ok_or_else(|| BillingError::school_not_found(cmd.school_id))?;

        let request = PixOrderRequest {
            school_id: school.id,
            customer_name: school.name,
            customer_email: school.email,
            amount_cents,
            description: self.policy.description.clone(),
            item_code: SUBSCRIPTION_ITEM_CODE.to_string(),
            expires_in_secs: self.policy.expires_in_secs,
        };

        let order = self.gateway.create_pix_order(request).await.map_err(|e| {
            tracing::error!(school_id = %cmd.school_id, error = %e, "Pix order creation failed");
            BillingError::from(e)
        })?;

        tracing::info!(
            school_id = %cmd.school_id,
            order_id = %order.order_id,
            amount_cents,
            "Pix order created"
        );

        let record = PaymentRecord::pending_order(
            cmd.school_id,
            PaymentVendor::Pagarme,
            order.order_id.clone(),
            order.amount_cents,
        );
        if let Err(e) = self.payments.record(&record).await {
            tracing::warn!(school_id = %cmd.school_id, error = %e, "Failed to store pending payment");
        }

        Ok(order)
    }
}
