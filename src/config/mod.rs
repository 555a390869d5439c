//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `BOXOFFICE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use boxoffice::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod admin;
mod error;
mod features;
mod firebase;
mod payment;
mod server;

pub use admin::AdminConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use firebase::FirebaseConfig;
pub use payment::PaymentConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults so the server can start without gateway
/// credentials; a missing signing secret is reported per request instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Payment gateway configuration (Razorpay)
    #[serde(default)]
    pub payment: PaymentConfig,

    /// Identity and document store configuration (Firebase)
    #[serde(default)]
    pub firebase: FirebaseConfig,

    /// Default administrator identity used by `provision-admin`
    #[serde(default)]
    pub admin: AdminConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `BOXOFFICE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `BOXOFFICE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `BOXOFFICE__PAYMENT__RAZORPAY_KEY_SECRET=...` -> `payment.razorpay_key_secret = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BOXOFFICE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate the sections the HTTP server depends on
    ///
    /// Firebase and admin sections are only validated by the provisioning
    /// binary, see [`AppConfig::validate_for_provisioning`].
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.payment.validate()?;
        Ok(())
    }

    /// Validate everything `provision-admin` needs.
    pub fn validate_for_provisioning(&self) -> Result<(), ValidationError> {
        self.firebase.validate()?;
        self.admin.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
