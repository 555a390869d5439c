//! In-memory identity provider for testing.
//!
//! Emails are unique, matching Firebase Authentication. Supports error
//! injection per operation and call tracking.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::admin::{AdminIdentity, IdentityId};
use crate::ports::{IdentityError, IdentityProvider};

#[derive(Default, Clone)]
pub struct MockIdentityProvider {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// email -> (uid, password)
    accounts: HashMap<String, (IdentityId, String)>,
    create_error: Option<IdentityError>,
    resolve_error: Option<IdentityError>,
    call_log: Vec<&'static str>,
}

impl MockIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing account.
    pub fn with_account(self, email: &str, password: &str, uid: &str) -> Self {
        self.inner.lock().unwrap().accounts.insert(
            email.to_string(),
            (IdentityId::new(uid), password.to_string()),
        );
        self
    }

    /// Fail the next `create_identity` call.
    pub fn fail_next_create(&self, error: IdentityError) {
        self.inner.lock().unwrap().create_error = Some(error);
    }

    /// Fail the next `resolve_identity` call.
    pub fn fail_next_resolve(&self, error: IdentityError) {
        self.inner.lock().unwrap().resolve_error = Some(error);
    }

    /// Number of accounts held.
    pub fn account_count(&self) -> usize {
        self.inner.lock().unwrap().accounts.len()
    }

    /// Uid of the account with `email`, if any.
    pub fn uid_for(&self, email: &str) -> Option<IdentityId> {
        self.inner
            .lock()
            .unwrap()
            .accounts
            .get(email)
            .map(|(uid, _)| uid.clone())
    }

    /// Operation names in call order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.inner.lock().unwrap().call_log.clone()
    }

    /// Number of calls to `method`.
    pub fn call_count(&self, method: &str) -> usize {
        self.calls().iter().filter(|m| **m == method).count()
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn create_identity(&self, identity: &AdminIdentity) -> Result<IdentityId, IdentityError> {
        let mut state = self.inner.lock().unwrap();
        state.call_log.push("create_identity");

        if let Some(err) = state.create_error.take() {
            return Err(err);
        }
        if state.accounts.contains_key(&identity.email) {
            return Err(IdentityError::AlreadyExists);
        }

        let uid = IdentityId::new(uuid::Uuid::new_v4().simple().to_string());
        state.accounts.insert(
            identity.email.clone(),
            (uid.clone(), identity.password().to_string()),
        );
        Ok(uid)
    }

    async fn resolve_identity(
        &self,
        identity: &AdminIdentity,
    ) -> Result<IdentityId, IdentityError> {
        let mut state = self.inner.lock().unwrap();
        state.call_log.push("resolve_identity");

        if let Some(err) = state.resolve_error.take() {
            return Err(err);
        }
        match state.accounts.get(&identity.email) {
            Some((uid, password)) if password == identity.password() => Ok(uid.clone()),
            _ => Err(IdentityError::InvalidCredentials),
        }
    }
}
