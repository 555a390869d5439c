//! Administrator identity value objects.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Opaque user id issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityId(String);

impl IdentityId {
    /// Wraps a provider-issued id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Credentials and display name of the administrator to provision.
#[derive(Clone)]
pub struct AdminIdentity {
    pub email: String,
    pub password: SecretString,
    pub display_name: String,
}

impl AdminIdentity {
    pub fn new(
        email: impl Into<String>,
        password: SecretString,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password,
            display_name: display_name.into(),
        }
    }

    /// Exposes the password for the provider call.
    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }
}

impl fmt::Debug for AdminIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminIdentity")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("display_name", &self.display_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_id_displays_raw_value() {
        let id = IdentityId::new("uid_123");
        assert_eq!(id.to_string(), "uid_123");
        assert_eq!(id.as_str(), "uid_123");
    }

    #[test]
    fn admin_identity_debug_redacts_password() {
        let identity = AdminIdentity::new(
            "admin@boxoffice.test",
            SecretString::new("hunter22".to_string()),
            "Administrator",
        );

        let debug = format!("{:?}", identity);

        assert!(debug.contains("admin@boxoffice.test"));
        assert!(!debug.contains("hunter22"));
        assert_eq!(identity.password(), "hunter22");
    }
}
