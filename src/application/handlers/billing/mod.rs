//! Billing handlers.
//!
//! ## Commands
//! - Reconciling vendor payment webhooks
//! - Creating Pix orders
//!
//! ## Queries
//! - Get a school's entitlement

mod create_pix_order;
mod entitlement_updater;
mod get_entitlement;
mod reconcile_payment;
mod subscriber_resolver;

// Building blocks
pub use entitlement_updater::EntitlementUpdater;
pub use subscriber_resolver::SubscriberResolver;

// Commands
pub use create_pix_order::{
    CreatePixOrderCommand, CreatePixOrderHandler, OrderPolicy, SUBSCRIPTION_ITEM_CODE,
};
pub use reconcile_payment::{
    ReconcilePaymentCommand, ReconcilePaymentHandler, ReconcilePaymentResult,
};

// Queries
pub use get_entitlement::{EntitlementView, GetEntitlementHandler, GetEntitlementQuery};
