//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, value objects, and error types that form the
//! vocabulary of the billing domain.

mod errors;
mod ids;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{EmailAddress, PaymentRecordId, SchoolId};
