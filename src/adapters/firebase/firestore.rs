//! Cloud Firestore adapter (REST API v1).
//!
//! Documents live under
//! `{base}/v1/projects/{project}/databases/(default)/documents/{collection}/{id}`.
//! Creation uses `POST .../{collection}?documentId={id}`, which Firestore
//! refuses with 409 when the document already exists.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Map, Value};

use crate::config::FirebaseConfig;
use crate::ports::{Document, DocumentStore, DocumentStoreError, FieldValue};

/// Firestore connection settings.
#[derive(Clone)]
pub struct FirestoreConfig {
    project_id: String,
    access_token: SecretString,
    base_url: String,
}

impl FirestoreConfig {
    pub fn new(project_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            access_token: SecretString::new(access_token.into()),
            base_url: "https://firestore.googleapis.com".to_string(),
        }
    }

    /// Build from application configuration.
    ///
    /// `None` unless both project id and access token are present.
    pub fn from_firebase_config(config: &FirebaseConfig) -> Option<Self> {
        let project_id = config.project_id.clone().filter(|p| !p.is_empty())?;
        let access_token = config.access_token.clone()?;
        Some(Self {
            project_id,
            access_token,
            base_url: config.firestore_base_url.clone(),
        })
    }

    /// Set a custom base URL (for testing or the emulator).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/v1/projects/{}/databases/(default)/documents/{}",
            self.base_url.trim_end_matches('/'),
            self.project_id,
            collection
        )
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}", self.collection_url(collection), id)
    }
}

/// Firestore-backed document store.
pub struct FirestoreDocumentStore {
    config: FirestoreConfig,
    http_client: reqwest::Client,
}

impl FirestoreDocumentStore {
    pub fn new(config: FirestoreConfig, timeout: Duration) -> Result<Self, DocumentStoreError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DocumentStoreError::Unavailable(e.to_string()))?;

        Ok(Self {
            config,
            http_client,
        })
    }
}

/// Encodes a field as a Firestore typed value.
fn encode_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::String(s) => json!({ "stringValue": s }),
        FieldValue::Timestamp(ts) => json!({ "timestampValue": ts.to_rfc3339() }),
    }
}

/// Encodes a document as a Firestore `Document` resource body.
pub fn encode_document(document: &Document) -> Value {
    let fields: Map<String, Value> = document
        .iter()
        .map(|(name, value)| (name.clone(), encode_value(value)))
        .collect();
    json!({ "fields": fields })
}

async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();
    match response.json::<Value>().await {
        Ok(body) => body["error"]["message"]
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| status.to_string()),
        Err(_) => status.to_string(),
    }
}

#[async_trait]
impl DocumentStore for FirestoreDocumentStore {
    async fn exists(&self, collection: &str, id: &str) -> Result<bool, DocumentStoreError> {
        let response = self
            .http_client
            .get(self.config.document_url(collection, id))
            .bearer_auth(self.config.access_token.expose_secret())
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Firestore read of {}/{} failed: {}", collection, id, e);
                DocumentStoreError::Unavailable(e.to_string())
            })?;

        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => {
                let message = error_message(response).await;
                tracing::warn!(status = status.as_u16(), %message, "Firestore read rejected");
                Err(DocumentStoreError::Rejected(message))
            }
        }
    }

    async fn create(
        &self,
        collection: &str,
        id: &str,
        document: Document,
    ) -> Result<(), DocumentStoreError> {
        let response = self
            .http_client
            .post(self.config.collection_url(collection))
            .query(&[("documentId", id)])
            .bearer_auth(self.config.access_token.expose_secret())
            .json(&encode_document(&document))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Firestore write of {}/{} failed: {}", collection, id, e);
                DocumentStoreError::Unavailable(e.to_string())
            })?;

        match response.status() {
            status if status.is_success() => {
                tracing::debug!("Created Firestore document {}/{}", collection, id);
                Ok(())
            }
            StatusCode::CONFLICT => Err(DocumentStoreError::AlreadyExists),
            status => {
                let message = error_message(response).await;
                tracing::warn!(status = status.as_u16(), %message, "Firestore write rejected");
                Err(DocumentStoreError::Rejected(message))
            }
        }
    }
}
