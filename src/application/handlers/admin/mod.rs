//! Administrator provisioning handlers.

mod provision_admin;

pub use provision_admin::{profile_document, ProvisionAdminCommand, ProvisionAdminHandler};
