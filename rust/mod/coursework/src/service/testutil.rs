//! Shared fixtures for the service tests.

use std::sync::Arc;

use campus_auth::model::{Identity, RegisterIdentity};
use campus_auth::service::{AuthConfig, AuthService};
use campus_groups::model::{AddStudents, AssignCourse, CreateClassGroup, CreateDepartment};
use campus_groups::service::GroupsService;
use campus_store::{DocStore, SqliteStore};

use crate::service::CourseworkService;

/// One course group with its usual cast, wired over a single in-memory
/// store the way the server binary wires it. `outsider` is a student
/// never enrolled in the class; `other_faculty` teaches nothing here.
pub struct TestCourse {
    pub auth: Arc<AuthService>,
    pub groups: Arc<GroupsService>,
    pub coursework: Arc<CourseworkService>,
    pub dept_id: String,
    pub class_id: String,
    pub course_id: String,
    pub hod: Identity,
    pub faculty: Identity,
    pub other_faculty: Identity,
    pub student: Identity,
    pub outsider: Identity,
}

impl TestCourse {
    pub fn new() -> Self {
        let store: Arc<dyn DocStore> = Arc::new(SqliteStore::open_in_memory().unwrap());
        let auth = AuthService::new(store.clone(), AuthConfig::default()).unwrap();
        let groups = GroupsService::new(store.clone()).unwrap();
        let coursework = CourseworkService::new(store, groups.clone()).unwrap();

        let hod = register(&auth, "hod@campus.edu", "hod");
        let faculty = register(&auth, "fac@campus.edu", "faculty");
        let other_faculty = register(&auth, "fac2@campus.edu", "faculty");
        let student = register(&auth, "stu@campus.edu", "student");
        let outsider = register(&auth, "out@campus.edu", "student");

        let dept = groups
            .create_department(CreateDepartment { name: "CSE".into() })
            .unwrap();
        groups.set_department_hod(&dept.id, &hod.id).unwrap();
        groups.add_department_member(&dept.id, &faculty.id).unwrap();

        let class = groups
            .create_class_group(CreateClassGroup {
                name: "CSE-A".into(),
                year: 2026,
                batch: "2023".into(),
                department_id: dept.id.clone(),
            })
            .unwrap();
        groups.set_class_coordinator(&class.id, &faculty.id).unwrap();
        groups
            .add_class_students(
                &class.id,
                AddStudents {
                    student_ids: vec![student.id.clone()],
                },
            )
            .unwrap();

        let course = groups
            .assign_course(
                &faculty,
                AssignCourse {
                    course_code: "CS301".into(),
                    course_name: "Operating Systems".into(),
                    semester: 5,
                    faculty_id: faculty.id.clone(),
                    class_group_id: class.id.clone(),
                },
            )
            .unwrap();

        Self {
            auth,
            groups,
            coursework,
            dept_id: dept.id,
            class_id: class.id,
            course_id: course.id,
            hod,
            faculty,
            other_faculty,
            student,
            outsider,
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
