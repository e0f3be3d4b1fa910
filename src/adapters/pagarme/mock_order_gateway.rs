//! Mock order gateway for testing.
//!
//! Records every request and answers with a canned Pix order or a canned
//! failure.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::ports::{OrderError, OrderGateway, PixOrder, PixOrderRequest};

/// Mock [`OrderGateway`].
///
/// # Example
///
/// ```ignore
/// let gateway = Arc::new(MockOrderGateway::new());
/// handler.handle(cmd).await?;
/// assert_eq!(gateway.requests()[0].amount_cents, 9990);
/// ```
#[derive(Default)]
pub struct MockOrderGateway {
    requests: Mutex<Vec<PixOrderRequest>>,
    failure: Option<OrderError>,
}

impl MockOrderGateway {
    /// Gateway that accepts every order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gateway that answers every order with the given HTTP status and body.
    pub fn rejecting(status: u16, body: impl Into<String>) -> Self {
        Self::failing_with(OrderError::Rejected {
            vendor: "Pagar.me",
            status,
            body: body.into(),
        })
    }

    /// Gateway whose orders come back `failed` with no Pix code.
    pub fn issuing_no_pix_code() -> Self {
        Self::failing_with(OrderError::Failed {
            vendor: "Pagar.me",
            order_id: "or_mock_failed".to_string(),
            status: "failed".to_string(),
        })
    }

    fn failing_with(error: OrderError) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            failure: Some(error),
        }
    }

    /// Requests received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn requests(&self) -> Vec<PixOrderRequest> {
        self.requests
            .lock()
            .expect("MockOrderGateway: requests lock poisoned")
            .clone()
    }
}

#[async_trait]
impl OrderGateway for MockOrderGateway {
    async fn create_pix_order(&self, request: PixOrderRequest) -> Result<PixOrder, OrderError> {
        let sequence = {
            let mut requests = self
                .requests
                .lock()
                .map_err(|_| OrderError::Network("mock gateway lock poisoned".to_string()))?;
            requests.push(request.clone());
            requests.len()
        };

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        Ok(PixOrder {
            order_id: format!("or_mock_{}", sequence),
            status: "pending".to_string(),
            amount_cents: request.amount_cents,
            pix_code: Some(format!("00020126mock{}", request.school_id)),
            qr_code_url: Some(format!("https://pix.mock/qr/or_mock_{}.png", sequence)),
            expires_at: Some(Utc::now() + Duration::seconds(i64::from(request.expires_in_secs))),
        })
    }
}
