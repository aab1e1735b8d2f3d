use campus_core::{ListResult, PageParams, new_id, now_rfc3339};
use campus_store::{StoreError, Value, docs};
use tracing::info;

use crate::model::{Identity, RegisterIdentity, Role};
use crate::service::{AuthError, AuthService, password};

impl AuthService {
    /// Register a new identity.
    ///
    /// Admin identities are not registrable here; the only admin is
    /// created at bootstrap from server configuration.
    pub fn register_identity(&self, input: RegisterIdentity) -> Result<Identity, AuthError> {
        if input.name.is_empty() || input.email.is_empty() || input.password.is_empty() {
            return Err(AuthError::Validation(
                "Please provide name, email and password".into(),
            ));
        }

        let role: Role = input
            .role
            .parse()
            .map_err(|_| AuthError::Validation(format!("Role ({}) is not valid", input.role)))?;
        if role == Role::Admin {
            return Err(AuthError::Validation(
                "Admin identities cannot be registered".into(),
            ));
        }

        let hash = password::hash_password(&input.password).map_err(AuthError::Internal)?;

        let now = now_rfc3339();
        let identity = Identity {
            id: new_id(),
            name: input.name,
            email: input.email.to_lowercase(),
            role,
            department: input.department,
            class_group: input.class_group,
            batch: input.batch,
            year: input.year,
            created_at: now.clone(),
            updated_at: now,
        };

        self.insert_identity(&identity, &hash)?;
        Ok(identity)
    }

    /// Insert an identity row; duplicate email maps to Conflict.
    fn insert_identity(&self, identity: &Identity, hash: &str) -> Result<(), AuthError> {
        docs::insert_doc(
            self.store.as_ref(),
            "identities",
            &identity.id,
            &[
                ("name", Value::Text(identity.name.clone())),
                ("email", Value::Text(identity.email.clone())),
                ("role", Value::Text(identity.role.to_string())),
                ("password_hash", Value::Text(hash.to_string())),
                ("created_at", Value::Text(identity.created_at.clone())),
                ("updated_at", Value::Text(identity.updated_at.clone())),
            ],
            identity,
        )
        .map_err(|e| match e {
            StoreError::Conflict(_) => AuthError::Conflict("Email already registered".into()),
            other => other.into(),
        })
    }

    /// Get an identity by id.
    pub fn get_identity(&self, id: &str) -> Result<Identity, AuthError> {
        docs::get_doc(self.store.as_ref(), "identities", id)?
            .ok_or_else(|| AuthError::NotFound(format!("identity {id}")))
    }

    /// Look up an identity and its password hash by email.
    pub fn find_identity_by_email(
        &self,
        email: &str,
    ) -> Result<Option<(Identity, String)>, AuthError> {
        let rows = self.store.query(
            "SELECT data, password_hash FROM identities WHERE email = ?1",
            &[Value::Text(email.to_lowercase())],
        )?;
        let Some(row) = rows.first() else {
            return Ok(None);
        };
        let data = row
            .get_str("data")
            .ok_or_else(|| AuthError::Internal("missing data column".into()))?;
        let hash = row
            .get_str("password_hash")
            .ok_or_else(|| AuthError::Internal("missing password_hash column".into()))?;
        let identity: Identity =
            serde_json::from_str(data).map_err(|e| AuthError::Internal(e.to_string()))?;
        Ok(Some((identity, hash.to_string())))
    }

    /// List identities, optionally filtered by role, newest first.
    pub fn list_identities(
        &self,
        role: Option<Role>,
        page: &PageParams,
    ) -> Result<ListResult<Identity>, AuthError> {
        let mut filters: Vec<(&str, Value)> = Vec::new();
        if let Some(role) = role {
            filters.push(("role", Value::Text(role.to_string())));
        }
        let (items, total) = docs::list_docs(
            self.store.as_ref(),
            "identities",
            &filters,
            page.limit(),
            page.offset(),
        )?;
        Ok(ListResult { items, total })
    }

    /// Delete an identity and all of its sessions.
    pub fn delete_identity(&self, id: &str) -> Result<(), AuthError> {
        self.store.exec(
            "DELETE FROM sessions WHERE identity_id = ?1",
            &[Value::Text(id.to_string())],
        )?;
        if !docs::delete_doc(self.store.as_ref(), "identities", id)? {
            return Err(AuthError::NotFound(format!("identity {id}")));
        }
        Ok(())
    }

    /// Bootstrap helper: create the admin identity if its email is not
    /// yet registered. The hash comes pre-computed from server config.
    pub fn ensure_admin(&self, name: &str, email: &str, hash: &str) -> Result<(), AuthError> {
        if self.find_identity_by_email(email)?.is_some() {
            return Ok(());
        }
        let now = now_rfc3339();
        let identity = Identity {
            id: new_id(),
            name: name.to_string(),
            email: email.to_lowercase(),
            role: Role::Admin,
            department: None,
            class_group: None,
            batch: None,
            year: None,
            created_at: now.clone(),
            updated_at: now,
        };
        self.insert_identity(&identity, hash)?;
        info!("Created admin identity {}", identity.email);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use campus_store::SqliteStore;

    use super::*;
    use crate::service::AuthConfig;

    fn test_service() -> Arc<AuthService> {
        let store = Arc::new(SqliteStore::open_in_memory().unwrap());
        AuthService::new(store, AuthConfig::default()).unwrap()
    }

    fn register(svc: &AuthService, name: &str, email: &str, role: &str) -> Identity {
        svc.register_identity(RegisterIdentity {
            name: name.into(),
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

    #[test]
    fn test_register_and_get() {
        let svc = test_service();
        let identity = register(&svc, "Asha", "Asha@Campus.edu", "student");
        // Email normalized to lowercase.
        assert_eq!(identity.email, "asha@campus.edu");
        assert_eq!(identity.role, Role::Student);

        let fetched = svc.get_identity(&identity.id).unwrap();
        assert_eq!(fetched.name, "Asha");
    }

    #[test]
    fn test_register_missing_fields() {
        let svc = test_service();
        let err = svc
            .register_identity(RegisterIdentity {
                name: "".into(),
                email: "x@campus.edu".into(),
                password: "pw".into(),
                role: "student".into(),
                department: None,
                class_group: None,
                batch: None,
                year: None,
            })
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[test]
    fn test_register_unknown_role() {
        let svc = test_service();
        let err = svc
            .register_identity(RegisterIdentity {
                name: "X".into(),
                email: "x@campus.edu".into(),
                password: "pw123456".into(),
                role: "dean".into(),
                department: None,
                class_group: None,
                batch: None,
                year: None,
            })
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[test]
    fn test_register_admin_rejected() {
        let svc = test_service();
        let err = svc
            .register_identity(RegisterIdentity {
                name: "Eve".into(),
                email: "eve@campus.edu".into(),
                password: "pw123456".into(),
                role: "admin".into(),
                department: None,
                class_group: None,
                batch: None,
                year: None,
            })
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[test]
    fn test_duplicate_email() {
        let svc = test_service();
        register(&svc, "Asha", "asha@campus.edu", "student");
        let err = svc
            .register_identity(RegisterIdentity {
                name: "Other".into(),
                email: "asha@campus.edu".into(),
                password: "pw123456".into(),
                role: "faculty".into(),
                department: None,
                class_group: None,
                batch: None,
                year: None,
            })
            .unwrap_err();
        match err {
            AuthError::Conflict(m) => assert_eq!(m, "Email already registered"),
            other => panic!("expected Conflict, got {:?}", other),
        }
    }

    #[test]
    fn test_find_by_email_returns_hash() {
        let svc = test_service();
        let identity = register(&svc, "Ravi", "ravi@campus.edu", "faculty");
        let (found, hash) = svc
            .find_identity_by_email("ravi@campus.edu")
            .unwrap()
            .unwrap();
        assert_eq!(found.id, identity.id);
        assert!(password::verify_password("pass1234", &hash));
        assert!(svc.find_identity_by_email("nobody@campus.edu").unwrap().is_none());
    }

    #[test]
    fn test_list_filtered_by_role() {
        let svc = test_service();
        register(&svc, "S1", "s1@campus.edu", "student");
        register(&svc, "S2", "s2@campus.edu", "student");
        register(&svc, "F1", "f1@campus.edu", "faculty");

        let all = svc
            .list_identities(None, &PageParams::default())
            .unwrap();
        assert_eq!(all.total, 3);

        let students = svc
            .list_identities(Some(Role::Student), &PageParams::default())
            .unwrap();
        assert_eq!(students.total, 2);
        assert!(students.items.iter().all(|i| i.role == Role::Student));
    }

    #[test]
    fn test_delete_identity_drops_sessions() {
        let svc = test_service();
        let identity = register(&svc, "Gone", "gone@campus.edu", "student");
        svc.issue_token(&identity).unwrap();

        svc.delete_identity(&identity.id).unwrap();
        assert!(matches!(
            svc.get_identity(&identity.id),
            Err(AuthError::NotFound(_))
        ));

        let rows = svc
            .store
            .query(
                "SELECT id FROM sessions WHERE identity_id = ?1",
                &[Value::Text(identity.id.clone())],
            )
            .unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_ensure_admin_idempotent() {
        let svc = test_service();
        let hash = password::hash_password("rootpw").unwrap();
        svc.ensure_admin("Registrar", "admin@campus.edu", &hash).unwrap();
        svc.ensure_admin("Registrar", "admin@campus.edu", &hash).unwrap();

        let (admin, _) = svc
            .find_identity_by_email("admin@campus.edu")
            .unwrap()
            .unwrap();
        assert_eq!(admin.role, Role::Admin);

        let admins = svc
            .list_identities(Some(Role::Admin), &PageParams::default())
            .unwrap();
        assert_eq!(admins.total, 1);
    }
}
