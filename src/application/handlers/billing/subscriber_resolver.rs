//! SubscriberResolver - maps a payment's subscriber reference to a school id.

use std::sync::Arc;

use crate::domain::billing::{SubscriberRef, WebhookError};
use crate::domain::foundation::SchoolId;
use crate::ports::SchoolRepository;

/// Resolves the school that paid.
///
/// A direct id from metadata is trusted as-is; its existence is checked by
/// the entitlement update. A payer email needs one exact-match lookup.
pub struct SubscriberResolver {
    schools: Arc<dyn SchoolRepository>,
}

impl SubscriberResolver {
    pub fn new(schools: Arc<dyn SchoolRepository>) -> Self {
        Self { schools }
    }

    pub async fn resolve(&self, subscriber: &SubscriberRef) -> Result<SchoolId, WebhookError> {
        match subscriber {
            SubscriberRef::Direct(id) => Ok(*id),
            SubscriberRef::PayerEmail(email) => self
                .schools
                .find_by_email(email)
                .await?
                .map(|school| school.id)
                .ok_or(WebhookError::UnresolvedSchool),
        }
    }
}
