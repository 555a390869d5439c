//! Default administrator configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Firebase rejects passwords shorter than this.
const MIN_PASSWORD_LEN: usize = 6;

/// The administrator identity `provision-admin` ensures exists.
///
/// The password must come from the environment or a secret store mounted
/// into it; there is no built-in default.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    /// Sign-in email
    pub email: Option<String>,

    /// Sign-in password
    pub password: Option<SecretString>,

    /// Display name shown in the admin console
    #[serde(default = "default_display_name")]
    pub display_name: String,
}

impl AdminConfig {
    /// Validate admin configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let email = self
            .email
            .as_deref()
            .ok_or(ValidationError::MissingRequired("ADMIN__EMAIL"))?;
        if !is_plausible_email(email) {
            return Err(ValidationError::InvalidAdminEmail);
        }

        let password = self
            .password
            .as_ref()
            .ok_or(ValidationError::MissingRequired("ADMIN__PASSWORD"))?;
        if password.expose_secret().chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::WeakAdminPassword);
        }

        Ok(())
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            email: None,
            password: None,
            display_name: default_display_name(),
        }
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}

fn default_display_name() -> String {
    "Administrator".to_string()
}
