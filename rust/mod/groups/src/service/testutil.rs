//! Shared fixtures for the service tests.

use std::sync::Arc;

use campus_auth::model::{Identity, RegisterIdentity};
use campus_auth::service::{AuthConfig, AuthService};
use campus_store::{DocStore, SqliteStore};

use crate::service::GroupsService;

/// Auth + groups services over one in-memory store, the same wiring the
/// server binary uses.
pub fn test_env() -> (Arc<AuthService>, Arc<GroupsService>) {
    let store: Arc<dyn DocStore> = Arc::new(SqliteStore::open_in_memory().unwrap());
    let auth = AuthService::new(store.clone(), AuthConfig::default()).unwrap();
    let groups = GroupsService::new(store).unwrap();
    (auth, groups)
}

/// Create a bootstrap admin identity. Registration refuses the admin
/// role, so tests go through the same path the server binary does.
pub fn admin(auth: &AuthService, email: &str) -> Identity {
    auth.ensure_admin("root", email, "unused-hash").unwrap();
    auth.find_identity_by_email(email).unwrap().unwrap().0
}

/// Register an identity with the given role.
pub fn register(auth: &AuthService, email: &str, role: &str) -> Identity {
    auth.register_identity(RegisterIdentity {
        name: email.split('@').next().unwrap_or("member").to_string(),
        email: email.into(),
        password: "pass1234".into(),
        role: role.into(),
        department: None,
        class_group: None,
        batch: None,
        year: None,
    })
    .unwrap()
}
