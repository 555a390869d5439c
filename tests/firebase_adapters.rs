//! Integration tests for the Firebase adapters against a mock HTTP server.
//!
//! These tests verify:
//! 1. Identity Toolkit request shape and error-code mapping
//! 2. Firestore existence checks, create-only writes, typed field encoding
//! 3. End-to-end provisioning over both adapters, run twice

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use boxoffice::adapters::firebase::{
    FirebaseIdentityProvider, FirestoreConfig, FirestoreDocumentStore, IdentityToolkitConfig,
};
use boxoffice::application::{ProvisionAdminCommand, ProvisionAdminHandler};
use boxoffice::domain::admin::{AdminIdentity, IdentityId, ProvisionOutcome};
use boxoffice::domain::foundation::Timestamp;
use boxoffice::ports::{
    Document, DocumentStore, DocumentStoreError, FieldValue, IdentityError, IdentityProvider,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

const API_KEY: &str = "AIza-test";
const TOKEN: &str = "ya29.test-token";
const PROJECT: &str = "boxoffice-test";
const USERS_PATH: &str = "/v1/projects/boxoffice-test/databases/(default)/documents/users";

fn identity() -> AdminIdentity {
    AdminIdentity::new(
        "admin@boxoffice.test",
        SecretString::new("correct-horse".to_string()),
        "Administrator",
    )
}

fn identity_provider(server: &MockServer) -> FirebaseIdentityProvider {
    let config = IdentityToolkitConfig::new(API_KEY).with_base_url(server.uri());
    FirebaseIdentityProvider::new(config, Duration::from_secs(5)).unwrap()
}

fn document_store(server: &MockServer) -> FirestoreDocumentStore {
    let config = FirestoreConfig::new(PROJECT, TOKEN).with_base_url(server.uri());
    FirestoreDocumentStore::new(config, Duration::from_secs(5)).unwrap()
}

fn identity_error(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(400).set_body_json(json!({
        "error": {
            "code": 400,
            "message": message,
            "errors": [{ "message": message, "domain": "global", "reason": "invalid" }]
        }
    }))
}

// =============================================================================
// Identity Toolkit
// =============================================================================

#[tokio::test]
async fn sign_up_posts_credentials_and_returns_local_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .and(query_param("key", API_KEY))
        .and(body_json(json!({
            "email": "admin@boxoffice.test",
            "password": "correct-horse",
            "displayName": "Administrator",
            "returnSecureToken": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "identitytoolkit#SignupNewUserResponse",
            "idToken": "eyJ...",
            "email": "admin@boxoffice.test",
            "refreshToken": "AE0...",
            "expiresIn": "3600",
            "localId": "Xk2n1rLq"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uid = identity_provider(&server)
        .create_identity(&identity())
        .await
        .unwrap();

    assert_eq!(uid, IdentityId::new("Xk2n1rLq"));
}

#[tokio::test]
async fn email_exists_maps_to_already_exists() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .respond_with(identity_error("EMAIL_EXISTS"))
        .mount(&server)
        .await;

    let result = identity_provider(&server).create_identity(&identity()).await;

    assert_eq!(result, Err(IdentityError::AlreadyExists));
}

#[tokio::test]
async fn other_sign_up_errors_carry_provider_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .respond_with(identity_error(
            "WEAK_PASSWORD : Password should be at least 6 characters",
        ))
        .mount(&server)
        .await;

    let result = identity_provider(&server).create_identity(&identity()).await;

    assert_eq!(
        result,
        Err(IdentityError::Rejected(
            "WEAK_PASSWORD : Password should be at least 6 characters".to_string()
        ))
    );
}

#[tokio::test]
async fn sign_in_resolves_existing_identity() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .and(query_param("key", API_KEY))
        .and(body_partial_json(json!({ "email": "admin@boxoffice.test" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "localId": "existing_uid",
            "email": "admin@boxoffice.test",
            "registered": true
        })))
        .mount(&server)
        .await;

    let uid = identity_provider(&server)
        .resolve_identity(&identity())
        .await
        .unwrap();

    assert_eq!(uid.as_str(), "existing_uid");
}

#[tokio::test]
async fn sign_in_with_wrong_password_is_invalid_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(identity_error("INVALID_LOGIN_CREDENTIALS"))
        .mount(&server)
        .await;

    let result = identity_provider(&server).resolve_identity(&identity()).await;

    assert_eq!(result, Err(IdentityError::InvalidCredentials));
}

// =============================================================================
// Firestore
// =============================================================================

#[tokio::test]
async fn exists_is_false_on_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{USERS_PATH}/uid_1")))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "code": 404, "message": "Document not found", "status": "NOT_FOUND" }
        })))
        .mount(&server)
        .await;

    assert!(!document_store(&server).exists("users", "uid_1").await.unwrap());
}

#[tokio::test]
async fn exists_is_true_on_200() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{USERS_PATH}/uid_1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "projects/boxoffice-test/databases/(default)/documents/users/uid_1",
            "fields": {}
        })))
        .mount(&server)
        .await;

    assert!(document_store(&server).exists("users", "uid_1").await.unwrap());
}

#[tokio::test]
async fn permission_denied_is_rejected_with_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{USERS_PATH}/uid_1")))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {
                "code": 403,
                "message": "Missing or insufficient permissions.",
                "status": "PERMISSION_DENIED"
            }
        })))
        .mount(&server)
        .await;

    let result = document_store(&server).exists("users", "uid_1").await;

    assert_eq!(
        result,
        Err(DocumentStoreError::Rejected(
            "Missing or insufficient permissions.".to_string()
        ))
    );
}

#[tokio::test]
async fn create_posts_typed_fields_with_document_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(USERS_PATH))
        .and(query_param("documentId", "uid_1"))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .and(body_json(json!({
            "fields": {
                "role": { "stringValue": "admin" },
                "createdAt": { "timestampValue": "2024-05-01T12:30:00.000000Z" }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let mut doc = Document::new();
    doc.insert("role".into(), FieldValue::String("admin".into()));
    doc.insert(
        "createdAt".into(),
        FieldValue::Timestamp(Timestamp::parse_rfc3339("2024-05-01T12:30:00Z").unwrap()),
    );

    document_store(&server)
        .create("users", "uid_1", doc)
        .await
        .unwrap();
}

#[tokio::test]
async fn create_conflict_maps_to_already_exists() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(USERS_PATH))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": { "code": 409, "message": "Document already exists", "status": "ALREADY_EXISTS" }
        })))
        .mount(&server)
        .await;

    let result = document_store(&server)
        .create("users", "uid_1", Document::new())
        .await;

    assert_eq!(result, Err(DocumentStoreError::AlreadyExists));
}

// =============================================================================
// End-to-end Provisioning
// =============================================================================

#[tokio::test]
async fn provisioning_against_existing_account_and_profile_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .respond_with(identity_error("EMAIL_EXISTS"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "localId": "uid_admin" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{USERS_PATH}/uid_admin")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "fields": {} })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(USERS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let handler = ProvisionAdminHandler::new(
        Arc::new(identity_provider(&server)),
        Arc::new(document_store(&server)),
    );

    let outcome = handler
        .handle(ProvisionAdminCommand {
            identity: identity(),
        })
        .await
        .unwrap();

    assert_eq!(
        outcome,
        ProvisionOutcome::AlreadyProvisioned(IdentityId::new("uid_admin"))
    );
}

#[tokio::test]
async fn provisioning_restores_missing_profile() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .respond_with(identity_error("EMAIL_EXISTS"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "localId": "uid_admin" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{USERS_PATH}/uid_admin")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(USERS_PATH))
        .and(query_param("documentId", "uid_admin"))
        .and(body_partial_json(json!({
            "fields": {
                "role": { "stringValue": "admin" },
                "email": { "stringValue": "admin@boxoffice.test" },
                "uid": { "stringValue": "uid_admin" }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let handler = ProvisionAdminHandler::new(
        Arc::new(identity_provider(&server)),
        Arc::new(document_store(&server)),
    );

    let outcome = handler
        .handle(ProvisionAdminCommand {
            identity: identity(),
        })
        .await
        .unwrap();

    assert_eq!(
        outcome,
        ProvisionOutcome::ProfileRestored(IdentityId::new("uid_admin"))
    );
}
