//! Billing domain - payment events, reconciliation rules, payment records.
//!
//! ## Module Structure
//!
//! - `vendor` - The payment vendors that call us
//! - `payment_event` - Vendor-neutral webhook event and subscriber reference
//! - `reconciliation` - Pure decision: acknowledge or renew
//! - `payment_record` - Rows of the payments table
//! - `webhook_errors` - Reconciliation failures and their HTTP mapping
//! - `errors` - Order creation and query failures

mod errors;
mod payment_event;
mod payment_record;
mod reconciliation;
mod vendor;
mod webhook_errors;

pub use errors::BillingError;
pub use payment_event::{PaymentEvent, PaymentStatus, SubscriberRef};
pub use payment_record::{PaymentRecord, PaymentRecordStatus};
pub use reconciliation::{plan_reconciliation, ReconciliationPlan};
pub use vendor::PaymentVendor;
pub use webhook_errors::WebhookError;
