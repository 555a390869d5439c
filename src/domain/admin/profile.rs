//! Administrator profile document.

use serde::{Deserialize, Serialize};

use super::identity::{AdminIdentity, IdentityId};
use crate::domain::foundation::Timestamp;

/// Collection holding one profile document per user, keyed by identity id.
pub const USERS_COLLECTION: &str = "users";

/// Role granted to the provisioned administrator.
pub const ADMIN_ROLE: &str = "admin";

/// Profile document written next to the administrator identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub uid: IdentityId,
    pub email: String,
    pub display_name: String,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl AdminProfile {
    /// Builds a fresh profile stamped with the same creation and update time.
    pub fn new(uid: IdentityId, identity: &AdminIdentity, now: Timestamp) -> Self {
        Self {
            uid,
            email: identity.email.clone(),
            display_name: identity.display_name.clone(),
            role: ADMIN_ROLE.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Document id within [`USERS_COLLECTION`].
    pub fn document_id(&self) -> &str {
        self.uid.as_str()
    }
}
