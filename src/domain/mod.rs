//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, value objects, errors)
//! - `school` - Tenants and their entitlement to the dashboard
//! - `billing` - Payment events, reconciliation rules, payment records

pub mod billing;
pub mod foundation;
pub mod school;
