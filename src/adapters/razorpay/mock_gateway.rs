//! Mock payment gateway for testing.
//!
//! Provides a configurable mock implementation of `PaymentGateway` for unit
//! and integration tests. Supports:
//! - Echoed order objects built from the request
//! - Pre-configured responses
//! - Error injection
//! - Call tracking

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use crate::domain::payment::OrderRequest;
use crate::ports::{GatewayError, GatewayOrder, PaymentGateway};

/// Mock payment gateway for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentGateway::new();
///
/// // Inject errors
/// mock.set_error(GatewayError::rejected(400, json!({"error": {...}})));
///
/// // Use in tests
/// let result = mock.create_order(&request).await;
/// assert_eq!(mock.call_count(), 1);
/// ```
#[derive(Default, Clone)]
pub struct MockPaymentGateway {
    /// Inner state (thread-safe for async tests).
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Order to return on next call instead of the echo.
    next_order: Option<GatewayOrder>,

    /// Error to return on next call.
    next_error: Option<GatewayError>,

    /// Error returned on every call until cleared.
    persistent_error: Option<GatewayError>,

    /// Requests received, in order.
    requests: Vec<OrderRequest>,
}

impl MockPaymentGateway {
    /// Create a new mock gateway that echoes requests back as orders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that fails every call with `error`.
    pub fn failing(error: GatewayError) -> Self {
        let mock = Self::new();
        mock.inner.lock().unwrap().persistent_error = Some(error);
        mock
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Set the order to return on the next `create_order` call.
    pub fn set_next_order(&self, order: GatewayOrder) {
        self.inner.lock().unwrap().next_order = Some(order);
    }

    /// Set an error to return on the next call.
    pub fn set_error(&self, error: GatewayError) {
        self.inner.lock().unwrap().next_error = Some(error);
    }

    /// Clear all configured errors.
    pub fn clear_errors(&self) {
        let mut state = self.inner.lock().unwrap();
        state.next_error = None;
        state.persistent_error = None;
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Assertion Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Requests received so far.
    pub fn requests(&self) -> Vec<OrderRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    /// Most recent request, if any.
    pub fn last_request(&self) -> Option<OrderRequest> {
        self.inner.lock().unwrap().requests.last().cloned()
    }

    /// Number of `create_order` calls.
    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().requests.len()
    }

    fn check_error(&self) -> Result<(), GatewayError> {
        let mut state = self.inner.lock().unwrap();
        if let Some(err) = state.persistent_error.clone() {
            return Err(err);
        }
        match state.next_error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn echo_order(request: &OrderRequest) -> GatewayOrder {
    let id = format!("order_mock_{}", uuid::Uuid::new_v4().simple());
    json!({
        "id": id,
        "entity": "order",
        "amount": request.amount,
        "amount_paid": 0,
        "amount_due": request.amount,
        "currency": request.currency,
        "receipt": request.receipt,
        "offer_id": null,
        "status": "created",
        "attempts": 0,
        "notes": request.notes,
        "created_at": chrono::Utc::now().timestamp(),
    })
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_order(&self, request: &OrderRequest) -> Result<GatewayOrder, GatewayError> {
        self.inner.lock().unwrap().requests.push(request.clone());
        self.check_error()?;

        let configured = self.inner.lock().unwrap().next_order.take();
        Ok(configured.unwrap_or_else(|| echo_order(request)))
    }
}
