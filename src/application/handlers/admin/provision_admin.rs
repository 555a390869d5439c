//! ProvisionAdminHandler - Command handler that bootstraps the administrator account.
//!
//! Safe to run any number of times. Each run converges on one identity and
//! one `users/{uid}` profile document:
//!
//! 1. Create the identity; if the email is taken, resolve the existing uid
//! 2. If the profile document is missing, create it
//!
//! A run interrupted between the two steps is completed by the next run.

use std::sync::Arc;

use crate::domain::admin::{
    AdminIdentity, AdminProfile, IdentityId, ProvisionError, ProvisionOutcome, USERS_COLLECTION,
};
use crate::domain::foundation::Timestamp;
use crate::ports::{
    Document, DocumentStore, DocumentStoreError, FieldValue, IdentityError, IdentityProvider,
};

/// Command to provision an administrator.
#[derive(Debug, Clone)]
pub struct ProvisionAdminCommand {
    pub identity: AdminIdentity,
}

/// Handler for administrator provisioning.
pub struct ProvisionAdminHandler {
    identities: Arc<dyn IdentityProvider>,
    documents: Arc<dyn DocumentStore>,
}

impl ProvisionAdminHandler {
    pub fn new(identities: Arc<dyn IdentityProvider>, documents: Arc<dyn DocumentStore>) -> Self {
        Self {
            identities,
            documents,
        }
    }

    pub async fn handle(
        &self,
        cmd: ProvisionAdminCommand,
    ) -> Result<ProvisionOutcome, ProvisionError> {
        let identity = cmd.identity;

        // 1. Identity
        let (uid, identity_created) = self.ensure_identity(&identity).await?;

        // 2. Profile document
        let profile_created = self.ensure_profile(&uid, &identity).await?;

        let outcome = match (identity_created, profile_created) {
            (true, _) => ProvisionOutcome::Created(uid),
            (false, true) => ProvisionOutcome::ProfileRestored(uid),
            (false, false) => ProvisionOutcome::AlreadyProvisioned(uid),
        };

        tracing::info!(
            email = %identity.email,
            uid = %outcome.identity_id(),
            ?outcome,
            "Administrator provisioning finished"
        );
        Ok(outcome)
    }

    async fn ensure_identity(
        &self,
        identity: &AdminIdentity,
    ) -> Result<(IdentityId, bool), ProvisionError> {
        match self.identities.create_identity(identity).await {
            Ok(uid) => {
                tracing::info!(email = %identity.email, %uid, "Created administrator identity");
                Ok((uid, true))
            }
            Err(IdentityError::AlreadyExists) => {
                tracing::info!(email = %identity.email, "Administrator identity already exists");
                let uid = self
                    .identities
                    .resolve_identity(identity)
                    .await
                    .map_err(|e| match e {
                        IdentityError::InvalidCredentials => ProvisionError::Identity(format!(
                            "{} exists but the supplied password does not match",
                            identity.email
                        )),
                        other => ProvisionError::Identity(other.to_string()),
                    })?;
                Ok((uid, false))
            }
            Err(e) => {
                tracing::error!(email = %identity.email, error = %e, "Identity creation failed");
                Err(ProvisionError::Identity(e.to_string()))
            }
        }
    }

    /// Returns whether this call wrote the document.
    async fn ensure_profile(
        &self,
        uid: &IdentityId,
        identity: &AdminIdentity,
    ) -> Result<bool, ProvisionError> {
        let exists = self
            .documents
            .exists(USERS_COLLECTION, uid.as_str())
            .await
            .map_err(|e| ProvisionError::Document(e.to_string()))?;
        if exists {
            return Ok(false);
        }

        let profile = AdminProfile::new(uid.clone(), identity, Timestamp::now());
        match self
            .documents
            .create(USERS_COLLECTION, profile.document_id(), profile_document(&profile))
            .await
        {
            Ok(()) => {
                tracing::info!(%uid, "Created administrator profile document");
                Ok(true)
            }
            // A concurrent run wrote it between the check and the create.
            Err(DocumentStoreError::AlreadyExists) => Ok(false),
            Err(e) => {
                tracing::error!(%uid, error = %e, "Profile document creation failed");
                Err(ProvisionError::Document(e.to_string()))
            }
        }
    }
}

/// Document fields for a profile, named as the web client reads them.
pub fn profile_document(profile: &AdminProfile) -> Document {
    let mut doc = Document::new();
    doc.insert(
        "uid".to_string(),
        FieldValue::String(profile.uid.as_str().to_string()),
    );
    doc.insert("email".to_string(), FieldValue::String(profile.email.clone()));
    doc.insert(
        "displayName".to_string(),
        FieldValue::String(profile.display_name.clone()),
    );
    doc.insert("role".to_string(), FieldValue::String(profile.role.clone()));
    doc.insert("createdAt".to_string(), FieldValue::Timestamp(profile.created_at));
    doc.insert("updatedAt".to_string(), FieldValue::Timestamp(profile.updated_at));
    doc
}
