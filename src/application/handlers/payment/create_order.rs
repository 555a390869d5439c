//! CreateOrderHandler - Command handler forwarding order creation to the gateway.

use std::sync::Arc;

use crate::domain::payment::OrderRequest;
use crate::ports::{GatewayError, GatewayOrder, PaymentGateway};

/// Command to create a gateway order.
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    pub request: OrderRequest,
}

/// Handler for order creation.
///
/// Makes exactly one gateway call per command and returns the gateway's
/// answer unchanged.
pub struct CreateOrderHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl CreateOrderHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, cmd: CreateOrderCommand) -> Result<GatewayOrder, GatewayError> {
        let CreateOrderCommand { request } = cmd;

        match self.gateway.create_order(&request).await {
            Ok(order) => {
                tracing::info!(
                    order_id = order["id"].as_str().unwrap_or_default(),
                    amount = request.amount,
                    currency = %request.currency,
                    receipt = request.receipt.as_deref().unwrap_or_default(),
                    "Gateway order created"
                );
                Ok(order)
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    receipt = request.receipt.as_deref().unwrap_or_default(),
                    "Gateway order creation failed"
                );
                Err(err)
            }
        }
    }
}
