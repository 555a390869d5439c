//! Ensures the default administrator exists.
//!
//! Creates the Firebase Authentication account and its `users/{uid}` Firestore
//! profile, completing whichever half is missing. Safe to re-run.
//!
//! # Environment Variables
//!
//! - `BOXOFFICE__ADMIN__EMAIL`, `BOXOFFICE__ADMIN__PASSWORD`,
//!   `BOXOFFICE__ADMIN__DISPLAY_NAME`
//! - `BOXOFFICE__FIREBASE__PROJECT_ID`, `BOXOFFICE__FIREBASE__WEB_API_KEY`,
//!   `BOXOFFICE__FIREBASE__ACCESS_TOKEN`
//!
//! Exits non-zero if provisioning fails.

use std::process::ExitCode;
use std::sync::Arc;

use boxoffice::adapters::firebase::{
    FirebaseIdentityProvider, FirestoreConfig, FirestoreDocumentStore, IdentityToolkitConfig,
};
use boxoffice::application::{ProvisionAdminCommand, ProvisionAdminHandler};
use boxoffice::config::{AdminConfig, AppConfig, ValidationError};
use boxoffice::domain::admin::{AdminIdentity, ProvisionOutcome};
use boxoffice::telemetry::init_tracing;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.server);

    match run(&config).await {
        Ok(outcome) => {
            let message = match outcome {
                ProvisionOutcome::Created(_) => "Administrator created",
                ProvisionOutcome::AlreadyProvisioned(_) => "Administrator already provisioned",
                ProvisionOutcome::ProfileRestored(_) => "Administrator profile restored",
            };
            tracing::info!(uid = %outcome.identity_id(), "{message}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Administrator provisioning failed: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &AppConfig) -> Result<ProvisionOutcome, Box<dyn std::error::Error>> {
    config.validate_for_provisioning()?;

    let timeout = config.server.request_timeout();
    let identity_config = IdentityToolkitConfig::from_firebase_config(&config.firebase)
        .ok_or(ValidationError::MissingRequired("FIREBASE__WEB_API_KEY"))?;
    let store_config = FirestoreConfig::from_firebase_config(&config.firebase)
        .ok_or(ValidationError::MissingRequired("FIREBASE__ACCESS_TOKEN"))?;

    let handler = ProvisionAdminHandler::new(
        Arc::new(FirebaseIdentityProvider::new(identity_config, timeout)?),
        Arc::new(FirestoreDocumentStore::new(store_config, timeout)?),
    );

    let identity = admin_identity(&config.admin)?;
    tracing::info!(email = %identity.email, "Provisioning administrator");

    let outcome = handler.handle(ProvisionAdminCommand { identity }).await?;
    Ok(outcome)
}

fn admin_identity(admin: &AdminConfig) -> Result<AdminIdentity, ValidationError> {
    let email = admin
        .email
        .clone()
        .ok_or(ValidationError::MissingRequired("ADMIN__EMAIL"))?;
    let password = admin
        .password
        .clone()
        .ok_or(ValidationError::MissingRequired("ADMIN__PASSWORD"))?;
    Ok(AdminIdentity::new(email, password, admin.display_name.clone()))
}
