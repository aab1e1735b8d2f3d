use campus_auth::model::Role;
use campus_core::{ListResult, PageParams, new_id, now_rfc3339};
use campus_store::{StoreError, Value, docs};

use crate::model::{CreateDepartment, Department};
use crate::service::{GroupsError, GroupsService};

impl GroupsService {
    /// Create a new department.
    pub fn create_department(&self, input: CreateDepartment) -> Result<Department, GroupsError> {
        if input.name.is_empty() {
            return Err(GroupsError::Validation("Please provide a name".into()));
        }

        let now = now_rfc3339();
        let department = Department {
            id: new_id(),
            name: input.name,
            hod: None,
            faculties: Vec::new(),
            students: Vec::new(),
            created_at: now.clone(),
            updated_at: now,
        };

        docs::insert_doc(
            self.store.as_ref(),
            "departments",
            &department.id,
            &[
                ("name", Value::Text(department.name.clone())),
                ("created_at", Value::Text(department.created_at.clone())),
                ("updated_at", Value::Text(department.updated_at.clone())),
            ],
            &department,
        )
        .map_err(|e| match e {
            StoreError::Conflict(_) => {
                GroupsError::Conflict(format!("Department ({}) already exists", department.name))
            }
            other => other.into(),
        })?;

        Ok(department)
    }

    /// Get a department by id.
    pub fn get_department(&self, id: &str) -> Result<Department, GroupsError> {
        docs::get_doc(self.store.as_ref(), "departments", id)?
            .ok_or_else(|| GroupsError::NotFound(format!("department {id}")))
    }

    /// List departments, newest first.
    pub fn list_departments(&self, page: &PageParams) -> Result<ListResult<Department>, GroupsError> {
        let (items, total) = docs::list_docs(
            self.store.as_ref(),
            "departments",
            &[],
            page.limit(),
            page.offset(),
        )?;
        Ok(ListResult { items, total })
    }

    /// Assign the head of department. The target must exist and hold a
    /// teaching role; re-assignment replaces the previous HOD.
    pub fn set_department_hod(&self, dept_id: &str, identity_id: &str) -> Result<Department, GroupsError> {
        if identity_id.is_empty() {
            return Err(GroupsError::Validation("Please provide identityId".into()));
        }
        let mut department = self.get_department(dept_id)?;
        let target = self
            .fetch_identity(identity_id)?
            .ok_or_else(|| GroupsError::NotFound(format!("identity {identity_id}")))?;
        if !matches!(target.role, Role::Faculty | Role::Hod) {
            return Err(GroupsError::Validation(
                "HOD must reference a faculty or hod identity".into(),
            ));
        }

        department.hod = Some(target.id);
        self.save_department(&mut department)?;
        Ok(department)
    }

    /// Add an identity to the department, routed by its role: faculty
    /// join the faculties list, students the students list. Adding an
    /// existing member is a no-op.
    pub fn add_department_member(
        &self,
        dept_id: &str,
        identity_id: &str,
    ) -> Result<Department, GroupsError> {
        if identity_id.is_empty() {
            return Err(GroupsError::Validation("Please provide identityId".into()));
        }
        let mut department = self.get_department(dept_id)?;
        let target = self
            .fetch_identity(identity_id)?
            .ok_or_else(|| GroupsError::NotFound(format!("identity {identity_id}")))?;

        let roster = match target.role {
            Role::Faculty | Role::Hod => &mut department.faculties,
            Role::Student => &mut department.students,
            other => {
                return Err(GroupsError::Validation(format!(
                    "Role ({other}) cannot be a department member"
                )));
            }
        };
        if !roster.contains(&target.id) {
            roster.push(target.id);
        }

        self.save_department(&mut department)?;
        Ok(department)
    }

    fn save_department(&self, department: &mut Department) -> Result<(), GroupsError> {
        department.updated_at = now_rfc3339();
        let updated = docs::update_doc(
            self.store.as_ref(),
            "departments",
            &department.id,
            &[
                ("name", Value::Text(department.name.clone())),
                ("updated_at", Value::Text(department.updated_at.clone())),
            ],
            department,
        )?;
        if !updated {
            return Err(GroupsError::NotFound(format!("department {}", department.id)));
        }
        Ok(())
    }
}
