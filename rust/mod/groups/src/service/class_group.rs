use campus_auth::model::Role;
use campus_core::{ListResult, PageParams, new_id, now_rfc3339};
use campus_store::{Value, docs};

use crate::model::{AddStudents, ClassGroup, CreateClassGroup};
use crate::service::{GroupsError, GroupsService};

impl GroupsService {
    /// Create a new class group under an existing department.
    pub fn create_class_group(&self, input: CreateClassGroup) -> Result<ClassGroup, GroupsError> {
        if input.name.is_empty() || input.batch.is_empty() || input.department_id.is_empty() {
            return Err(GroupsError::Validation(
                "Please provide name, year, batch and departmentId".into(),
            ));
        }
        // Management surface: a bad department reference is a 404, not
        // a silent denial.
        self.get_department(&input.department_id)?;

        let now = now_rfc3339();
        let class_group = ClassGroup {
            id: new_id(),
            name: input.name,
            year: input.year,
            batch: input.batch,
            department: input.department_id,
            tutor: None,
            program_coordinator: None,
            students: Vec::new(),
            created_at: now.clone(),
            updated_at: now,
        };

        docs::insert_doc(
            self.store.as_ref(),
            "class_groups",
            &class_group.id,
            &[
                ("name", Value::Text(class_group.name.clone())),
                ("department", Value::Text(class_group.department.clone())),
                ("created_at", Value::Text(class_group.created_at.clone())),
                ("updated_at", Value::Text(class_group.updated_at.clone())),
            ],
            &class_group,
        )?;

        Ok(class_group)
    }

    /// Get a class group by id.
    pub fn get_class_group(&self, id: &str) -> Result<ClassGroup, GroupsError> {
        docs::get_doc(self.store.as_ref(), "class_groups", id)?
            .ok_or_else(|| GroupsError::NotFound(format!("class group {id}")))
    }

    /// List class groups, optionally scoped to a department.
    pub fn list_class_groups(
        &self,
        department_id: Option<&str>,
        page: &PageParams,
    ) -> Result<ListResult<ClassGroup>, GroupsError> {
        let mut filters: Vec<(&str, Value)> = Vec::new();
        if let Some(dept) = department_id {
            filters.push(("department", Value::Text(dept.to_string())));
        }
        let (items, total) = docs::list_docs(
            self.store.as_ref(),
            "class_groups",
            &filters,
            page.limit(),
            page.offset(),
        )?;
        Ok(ListResult { items, total })
    }

    /// Assign the class tutor. Replaces any previous tutor.
    pub fn set_class_tutor(&self, class_id: &str, identity_id: &str) -> Result<ClassGroup, GroupsError> {
        let mut class_group = self.get_class_group(class_id)?;
        self.require_faculty(identity_id, "Tutor")?;
        class_group.tutor = Some(identity_id.to_string());
        self.save_class_group(&mut class_group)?;
        Ok(class_group)
    }

    /// Assign the program coordinator. Replaces any previous one.
    pub fn set_class_coordinator(
        &self,
        class_id: &str,
        identity_id: &str,
    ) -> Result<ClassGroup, GroupsError> {
        let mut class_group = self.get_class_group(class_id)?;
        self.require_faculty(identity_id, "Program coordinator")?;
        class_group.program_coordinator = Some(identity_id.to_string());
        self.save_class_group(&mut class_group)?;
        Ok(class_group)
    }

    /// Enroll students. Non-student targets are rejected; duplicates
    /// are ignored.
    pub fn add_class_students(
        &self,
        class_id: &str,
        input: AddStudents,
    ) -> Result<ClassGroup, GroupsError> {
        if input.student_ids.is_empty() {
            return Err(GroupsError::Validation("Please provide studentIds".into()));
        }
        let mut class_group = self.get_class_group(class_id)?;
        for id in &input.student_ids {
            let target = self
                .fetch_identity(id)?
                .ok_or_else(|| GroupsError::NotFound(format!("identity {id}")))?;
            if target.role != Role::Student {
                return Err(GroupsError::Validation(format!(
                    "Identity ({id}) is not a student"
                )));
            }
            if !class_group.students.contains(id) {
                class_group.students.push(id.clone());
            }
        }
        self.save_class_group(&mut class_group)?;
        Ok(class_group)
    }

    fn require_faculty(&self, identity_id: &str, label: &str) -> Result<(), GroupsError> {
        if identity_id.is_empty() {
            return Err(GroupsError::Validation("Please provide identityId".into()));
        }
        let target = self
            .fetch_identity(identity_id)?
            .ok_or_else(|| GroupsError::NotFound(format!("identity {identity_id}")))?;
        if target.role != Role::Faculty {
            return Err(GroupsError::Validation(format!(
                "{label} must reference a faculty identity"
            )));
        }
        Ok(())
    }

    fn save_class_group(&self, class_group: &mut ClassGroup) -> Result<(), GroupsError> {
        class_group.updated_at = now_rfc3339();
        let updated = docs::update_doc(
            self.store.as_ref(),
            "class_groups",
            &class_group.id,
            &[
                ("name", Value::Text(class_group.name.clone())),
                ("department", Value::Text(class_group.department.clone())),
                ("updated_at", Value::Text(class_group.updated_at.clone())),
            ],
            class_group,
        )?;
        if !updated {
            return Err(GroupsError::NotFound(format!("class group {}", class_group.id)));
        }
        Ok(())
    }
}
