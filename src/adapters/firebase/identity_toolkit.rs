//! Firebase Authentication adapter (Identity Toolkit REST API).
//!
//! Creates email/password accounts with `accounts:signUp` and resolves
//! existing ones with `accounts:signInWithPassword`. Both calls authenticate
//! with the project's web API key.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::config::FirebaseConfig;
use crate::domain::admin::{AdminIdentity, IdentityId};
use crate::ports::{IdentityError, IdentityProvider};

/// Identity Toolkit connection settings.
#[derive(Clone)]
pub struct IdentityToolkitConfig {
    api_key: SecretString,
    base_url: String,
}

impl IdentityToolkitConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            base_url: "https://identitytoolkit.googleapis.com".to_string(),
        }
    }

    /// Build from application configuration. `None` without a web API key.
    pub fn from_firebase_config(config: &FirebaseConfig) -> Option<Self> {
        let api_key = config.web_api_key.clone()?;
        Some(Self {
            api_key,
            base_url: config.identity_base_url.clone(),
        })
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/v1/accounts:{}", self.base_url.trim_end_matches('/'), method)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    display_name: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Firebase Authentication identity provider.
pub struct FirebaseIdentityProvider {
    config: IdentityToolkitConfig,
    http_client: reqwest::Client,
}

impl FirebaseIdentityProvider {
    /// Create a new provider.
    pub fn new(config: IdentityToolkitConfig, timeout: Duration) -> Result<Self, IdentityError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| IdentityError::Unavailable(e.to_string()))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    async fn call<B: Serialize + ?Sized>(
        &self,
        method: &str,
        body: &B,
    ) -> Result<IdentityId, IdentityError> {
        let response = self
            .http_client
            .post(self.config.endpoint(method))
            .query(&[("key", self.config.api_key.expose_secret())])
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Identity Toolkit {} request failed: {}", method, e);
                IdentityError::Unavailable(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error.message)
                .unwrap_or_else(|_| status.to_string());
            tracing::warn!(status = status.as_u16(), %message, "Identity Toolkit {} rejected", method);
            return Err(map_error_message(&message));
        }

        let account: AccountResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Identity Toolkit response: {}", e);
            IdentityError::Rejected(format!("Invalid response: {}", e))
        })?;

        Ok(IdentityId::new(account.local_id))
    }
}

/// Maps an Identity Toolkit error message to a port error.
///
/// Messages look like `EMAIL_EXISTS` or `WEAK_PASSWORD : Password should be
/// at least 6 characters`; only the code before the colon is matched.
fn map_error_message(message: &str) -> IdentityError {
    let code = message.split(':').next().unwrap_or(message).trim();
    match code {
        "EMAIL_EXISTS" => IdentityError::AlreadyExists,
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            IdentityError::InvalidCredentials
        }
        _ => IdentityError::Rejected(message.to_string()),
    }
}

#[async_trait]
impl IdentityProvider for FirebaseIdentityProvider {
    async fn create_identity(&self, identity: &AdminIdentity) -> Result<IdentityId, IdentityError> {
        tracing::debug!(email = %identity.email, "Creating identity");
        self.call(
            "signUp",
            &SignUpRequest {
                email: &identity.email,
                password: identity.password(),
                display_name: &identity.display_name,
                return_secure_token: true,
            },
        )
        .await
    }

    async fn resolve_identity(
        &self,
        identity: &AdminIdentity,
    ) -> Result<IdentityId, IdentityError> {
        tracing::debug!(email = %identity.email, "Resolving existing identity");
        self.call(
            "signInWithPassword",
            &SignInRequest {
                email: &identity.email,
                password: identity.password(),
                return_secure_token: true,
            },
        )
        .await
    }
}
