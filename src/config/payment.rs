//! Payment configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Payment gateway configuration (Razorpay)
///
/// Both credentials are optional at load time. Without the key secret the
/// server still starts; `/verify-payment` then answers with a configuration
/// error instead of a verdict.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Razorpay key id (rzp_test_... or rzp_live_...)
    pub razorpay_key_id: Option<String>,

    /// Razorpay key secret, also the payment signature signing secret
    pub razorpay_key_secret: Option<SecretString>,

    /// Base URL for the Razorpay API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl PaymentConfig {
    /// The signing secret, if one is configured and non-empty.
    pub fn signing_secret(&self) -> Option<&SecretString> {
        self.razorpay_key_secret
            .as_ref()
            .filter(|secret| !secret.expose_secret().is_empty())
    }

    /// Key id, if one is configured and non-empty.
    pub fn key_id(&self) -> Option<&str> {
        self.razorpay_key_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Check if using Razorpay test mode
    pub fn is_test_mode(&self) -> bool {
        self.key_id().is_some_and(|id| id.starts_with("rzp_test_"))
    }

    /// Check if using Razorpay live mode
    pub fn is_live_mode(&self) -> bool {
        self.key_id().is_some_and(|id| id.starts_with("rzp_live_"))
    }

    /// Validate payment configuration
    ///
    /// Missing credentials are not a validation failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(key_id) = self.key_id() {
            if !key_id.starts_with("rzp_") {
                return Err(ValidationError::InvalidRazorpayKeyId);
            }
        }
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            return Err(ValidationError::InvalidUrl("PAYMENT__API_BASE_URL"));
        }
        Ok(())
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            razorpay_key_id: None,
            razorpay_key_secret: None,
            api_base_url: default_api_base_url(),
        }
    }
}

fn default_api_base_url() -> String {
    "https://api.razorpay.com".to_string()
}
