//! Shared fixtures for the service tests.

use std::sync::Arc;

use campus_auth::model::{Identity, RegisterIdentity};
use campus_auth::service::{AuthConfig, AuthService};
use campus_groups::model::CreateDepartment;
use campus_groups::service::GroupsService;
use campus_store::{DocStore, SqliteStore};

use crate::model::SendMessage;
use crate::service::CommsService;

/// One department with its usual cast, wired over a single in-memory
/// store the way the server binary wires it.
pub struct TestCampus {
    pub auth: Arc<AuthService>,
    pub groups: Arc<GroupsService>,
    pub comms: Arc<CommsService>,
    pub dept_id: String,
    pub hod: Identity,
    pub faculty: Identity,
    pub student: Identity,
    pub outsider: Identity,
    pub principal: Identity,
    pub admin: Identity,
}

impl TestCampus {
    pub fn new() -> Self {
        let store: Arc<dyn DocStore> = Arc::new(SqliteStore::open_in_memory().unwrap());
        let auth = AuthService::new(store.clone(), AuthConfig::default()).unwrap();
        let groups = GroupsService::new(store.clone()).unwrap();
        let comms = CommsService::new(store, groups.clone()).unwrap();

        let hod = register(&auth, "hod@campus.edu", "hod");
        let faculty = register(&auth, "fac@campus.edu", "faculty");
        let student = register(&auth, "stu@campus.edu", "student");
        let outsider = register(&auth, "out@campus.edu", "faculty");
        let principal = register(&auth, "principal@campus.edu", "principal");
        auth.ensure_admin("root", "root@campus.edu", "unused-hash").unwrap();
        let admin = auth.find_identity_by_email("root@campus.edu").unwrap().unwrap().0;

        let dept = groups
            .create_department(CreateDepartment { name: "CSE".into() })
            .unwrap();
        groups.set_department_hod(&dept.id, &hod.id).unwrap();
        groups.add_department_member(&dept.id, &faculty.id).unwrap();
        groups.add_department_member(&dept.id, &student.id).unwrap();

        Self {
            auth,
            groups,
            comms,
            dept_id: dept.id,
            hod,
            faculty,
            student,
            outsider,
            principal,
            admin,
        }
    }
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

/// Build a send-message input.
pub fn send_input(group_type: &str, group_id: &str, content: &str) -> SendMessage {
    SendMessage {
        group_type: Some(group_type.into()),
        group_id: Some(group_id.into()),
        content: content.into(),
    }
}
