//! Razorpay payment gateway adapter.
//!
//! Implements the `PaymentGateway` trait against the Razorpay Orders API.
//!
//! # Security
//!
//! - Requests authenticate with HTTP basic auth (key id / key secret)
//! - Secrets handled via `secrecy::SecretString`
//!
//! # Configuration
//!
//! ```ignore
//! let config = RazorpayConfig::new(key_id, key_secret);
//! let gateway = RazorpayGateway::new(Some(config), Duration::from_secs(30))?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::config::PaymentConfig;
use crate::domain::payment::OrderRequest;
use crate::ports::{GatewayError, GatewayOrder, PaymentGateway};

/// Razorpay API credentials and endpoint.
#[derive(Clone)]
pub struct RazorpayConfig {
    /// Key id (rzp_live_... or rzp_test_...).
    key_id: String,

    /// Key secret.
    key_secret: SecretString,

    /// Base URL for the Razorpay API (default: https://api.razorpay.com).
    api_base_url: String,
}

impl RazorpayConfig {
    /// Create a new Razorpay configuration.
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: SecretString::new(key_secret.into()),
            api_base_url: "https://api.razorpay.com".to_string(),
        }
    }

    /// Build from application configuration.
    ///
    /// Returns `None` unless both key id and key secret are present.
    pub fn from_payment_config(config: &PaymentConfig) -> Option<Self> {
        let key_id = config.key_id()?;
        let key_secret = config.signing_secret()?;
        Some(Self {
            key_id: key_id.to_string(),
            key_secret: key_secret.clone(),
            api_base_url: config.api_base_url.clone(),
        })
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    fn orders_url(&self) -> String {
        format!("{}/v1/orders", self.api_base_url.trim_end_matches('/'))
    }
}

/// Razorpay payment gateway adapter.
///
/// Constructed without credentials it still serves, answering every call
/// with `GatewayError::NotConfigured`.
pub struct RazorpayGateway {
    config: Option<RazorpayConfig>,
    http_client: reqwest::Client,
}

impl RazorpayGateway {
    /// Create a new adapter.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Unreachable` if the HTTP client cannot be built
    /// (TLS backend initialisation failure).
    pub fn new(config: Option<RazorpayConfig>, timeout: Duration) -> Result<Self, GatewayError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Unreachable(e.to_string()))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Whether credentials are present.
    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    async fn create_order(&self, request: &OrderRequest) -> Result<GatewayOrder, GatewayError> {
        let config = self.config.as_ref().ok_or(GatewayError::NotConfigured)?;

        let response = self
            .http_client
            .post(config.orders_url())
            .basic_auth(&config.key_id, Some(config.key_secret.expose_secret()))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Razorpay create_order request failed");
                GatewayError::Unreachable(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Unreachable(e.to_string()))?;

        if !status.is_success() {
            tracing::error!(
                status = status.as_u16(),
                receipt = request.receipt.as_deref().unwrap_or_default(),
                "Razorpay create_order rejected"
            );
            // Non-JSON error pages are relayed as a JSON string.
            let body = serde_json::from_str(&body).unwrap_or(Value::String(body));
            return Err(GatewayError::rejected(status.as_u16(), body));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, "Failed to parse Razorpay order response");
            GatewayError::InvalidResponse(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // "rzp_test_key:s3cr3t" base64-encoded
    const BASIC_AUTH: &str = "Basic cnpwX3Rlc3Rfa2V5OnMzY3IzdA==";

    fn gateway_for(server: &MockServer) -> RazorpayGateway {
        let config = RazorpayConfig::new("rzp_test_key", "s3cr3t").with_base_url(server.uri());
        RazorpayGateway::new(Some(config), Duration::from_secs(5)).unwrap()
    }

    fn order_request() -> OrderRequest {
        OrderRequest::new(50000, "rcpt_11").with_note("show", "matinee")
    }

    #[tokio::test]
    async fn create_order_forwards_fields_and_relays_order() {
        let server = MockServer::start().await;
        let order = json!({
            "id": "order_EKwxwAgItmmXdp",
            "entity": "order",
            "amount": 50000,
            "amount_paid": 0,
            "amount_due": 50000,
            "currency": "INR",
            "receipt": "rcpt_11",
            "offer_id": null,
            "status": "created",
            "attempts": 0,
            "notes": { "show": "matinee" },
            "created_at": 1582628071
        });

        Mock::given(method("POST"))
            .and(path("/v1/orders"))
            .and(header("authorization", BASIC_AUTH))
            .and(body_json(json!({
                "amount": 50000,
                "currency": "INR",
                "receipt": "rcpt_11",
                "notes": { "show": "matinee" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(&order))
            .expect(1)
            .mount(&server)
            .await;

        let result = gateway_for(&server).create_order(&order_request()).await;

        assert_eq!(result.unwrap(), order);
    }

    #[tokio::test]
    async fn create_order_relays_gateway_error_body_verbatim() {
        let server = MockServer::start().await;
        let error = json!({
            "error": {
                "code": "BAD_REQUEST_ERROR",
                "description": "The amount must be atleast INR 1.00",
                "source": "business",
                "step": "payment_initiation",
                "reason": "input_validation_failed",
                "metadata": {},
                "field": "amount"
            }
        });

        Mock::given(method("POST"))
            .and(path("/v1/orders"))
            .respond_with(ResponseTemplate::new(400).set_body_json(&error))
            .expect(1)
            .mount(&server)
            .await;

        let result = gateway_for(&server)
            .create_order(&OrderRequest::new(10, "rcpt_small"))
            .await;

        assert_eq!(result, Err(GatewayError::rejected(400, error)));
    }

    #[tokio::test]
    async fn create_order_relays_non_json_error_as_string() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/orders"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let result = gateway_for(&server).create_order(&order_request()).await;

        assert_eq!(
            result,
            Err(GatewayError::rejected(502, Value::String("Bad Gateway".into())))
        );
    }

    #[tokio::test]
    async fn create_order_does_not_retry() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/orders"))
            .respond_with(ResponseTemplate::new(503).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let result = gateway_for(&server).create_order(&order_request()).await;

        assert!(matches!(result, Err(GatewayError::Rejected { status: 503, .. })));
    }

    #[tokio::test]
    async fn create_order_with_invalid_success_body_fails() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/orders"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let result = gateway_for(&server).create_order(&order_request()).await;

        assert!(matches!(result, Err(GatewayError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn create_order_without_credentials_is_not_configured() {
        let gateway = RazorpayGateway::new(None, Duration::from_secs(5)).unwrap();

        assert!(!gateway.is_configured());
        assert_eq!(
            gateway.create_order(&order_request()).await,
            Err(GatewayError::NotConfigured)
        );
    }

    #[tokio::test]
    async fn create_order_unreachable_gateway() {
        let config = RazorpayConfig::new("rzp_test_key", "s3cr3t")
            .with_base_url("http://127.0.0.1:1");
        let gateway = RazorpayGateway::new(Some(config), Duration::from_secs(2)).unwrap();

        let result = gateway.create_order(&order_request()).await;

        assert!(matches!(result, Err(GatewayError::Unreachable(_))));
    }

    #[test]
    fn from_payment_config_requires_both_credentials() {
        let mut payment = PaymentConfig {
            razorpay_key_id: Some("rzp_test_key".to_string()),
            ..Default::default()
        };
        assert!(RazorpayConfig::from_payment_config(&payment).is_none());

        payment.razorpay_key_secret = Some(SecretString::new("s3cr3t".to_string()));
        let config = RazorpayConfig::from_payment_config(&payment).unwrap();
        assert_eq!(config.orders_url(), "https://api.razorpay.com/v1/orders");
    }
}
