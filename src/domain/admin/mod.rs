//! Admin domain - the default administrator account.

mod errors;
mod identity;
mod profile;

pub use errors::ProvisionError;
pub use identity::{AdminIdentity, IdentityId};
pub use profile::{AdminProfile, ADMIN_ROLE, USERS_COLLECTION};

use serde::Serialize;

/// What a provisioning run did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "uid", rename_all = "snake_case")]
pub enum ProvisionOutcome {
    /// Identity and profile document were both created by this run.
    Created(IdentityId),

    /// Identity and profile already existed; nothing was written.
    AlreadyProvisioned(IdentityId),

    /// Identity existed without its profile document; the document was written.
    ProfileRestored(IdentityId),
}

impl ProvisionOutcome {
    /// The administrator's identity id.
    pub fn identity_id(&self) -> &IdentityId {
        match self {
            ProvisionOutcome::Created(id)
            | ProvisionOutcome::AlreadyProvisioned(id)
            | ProvisionOutcome::ProfileRestored(id) => id,
        }
    }

    /// Whether this run wrote anything.
    pub fn wrote_anything(&self) -> bool {
        !matches!(self, ProvisionOutcome::AlreadyProvisioned(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_provisioned_wrote_nothing() {
        let outcome = ProvisionOutcome::AlreadyProvisioned(IdentityId::new("uid_1"));
        assert!(!outcome.wrote_anything());
        assert_eq!(outcome.identity_id().as_str(), "uid_1");
    }

    #[test]
    fn created_and_restored_wrote_something() {
        assert!(ProvisionOutcome::Created(IdentityId::new("a")).wrote_anything());
        assert!(ProvisionOutcome::ProfileRestored(IdentityId::new("b")).wrote_anything());
    }

    #[test]
    fn serializes_with_outcome_tag() {
        let json =
            serde_json::to_value(ProvisionOutcome::Created(IdentityId::new("uid_9"))).unwrap();
        assert_eq!(json, serde_json::json!({ "outcome": "created", "uid": "uid_9" }));
    }
}
