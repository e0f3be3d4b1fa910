//! School domain - tenants and their entitlement to the dashboard.

mod aggregate;
mod entitlement;

pub use aggregate::School;
pub use entitlement::{Entitlement, RENEWAL_WINDOW_DAYS};
