//! Firebase configuration

use secrecy::SecretString;
use serde::Deserialize;

use super::error::ValidationError;

/// Identity and document store configuration (Firebase Auth + Firestore)
#[derive(Debug, Clone, Deserialize)]
pub struct FirebaseConfig {
    /// Firebase project id
    pub project_id: Option<String>,

    /// Web API key used by the Identity Toolkit endpoints
    pub web_api_key: Option<SecretString>,

    /// OAuth access token authorizing Firestore writes
    pub access_token: Option<SecretString>,

    /// Identity Toolkit base URL
    #[serde(default = "default_identity_base_url")]
    pub identity_base_url: String,

    /// Firestore base URL
    #[serde(default = "default_firestore_base_url")]
    pub firestore_base_url: String,
}

impl FirebaseConfig {
    /// Validate Firebase configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.project_id.as_deref().map_or(true, str::is_empty) {
            return Err(ValidationError::MissingRequired("FIREBASE__PROJECT_ID"));
        }
        if self.web_api_key.is_none() {
            return Err(ValidationError::MissingRequired("FIREBASE__WEB_API_KEY"));
        }
        if self.access_token.is_none() {
            return Err(ValidationError::MissingRequired("FIREBASE__ACCESS_TOKEN"));
        }
        if !is_http_url(&self.identity_base_url) {
            return Err(ValidationError::InvalidUrl("FIREBASE__IDENTITY_BASE_URL"));
        }
        if !is_http_url(&self.firestore_base_url) {
            return Err(ValidationError::InvalidUrl("FIREBASE__FIRESTORE_BASE_URL"));
        }
        Ok(())
    }
}

impl Default for FirebaseConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            web_api_key: None,
            access_token: None,
            identity_base_url: default_identity_base_url(),
            firestore_base_url: default_firestore_base_url(),
        }
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

fn default_identity_base_url() -> String {
    "https://identitytoolkit.googleapis.com".to_string()
}

fn default_firestore_base_url() -> String {
    "https://firestore.googleapis.com".to_string()
}
