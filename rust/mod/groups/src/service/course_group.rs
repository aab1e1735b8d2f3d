use campus_auth::model::{Identity, Role};
use campus_core::{ListResult, PageParams, new_id, now_rfc3339};
use campus_store::{Value, docs};

use crate::model::{AssignCourse, CourseGroup};
use crate::service::{GroupsError, GroupsService};

impl GroupsService {
    /// Assign a course to a class group, creating the course group.
    ///
    /// The route gate admits admins outright and defers faculty; here a
    /// faculty caller must be the class group's program coordinator.
    /// Students are copied from the class group at this moment, not
    /// referenced live.
    pub fn assign_course(
        &self,
        caller: &Identity,
        input: AssignCourse,
    ) -> Result<CourseGroup, GroupsError> {
        if input.course_code.is_empty()
            || input.course_name.is_empty()
            || input.semester == 0
            || input.faculty_id.is_empty()
            || input.class_group_id.is_empty()
        {
            return Err(GroupsError::Validation(
                "Please provide courseCode, courseName, semester, facultyId and classGroupId"
                    .into(),
            ));
        }

        let class_group = self.get_class_group(&input.class_group_id)?;

        if caller.role == Role::Faculty
            && class_group.program_coordinator.as_deref() != Some(caller.id.as_str())
        {
            return Err(GroupsError::Forbidden(format!(
                "Role ({}) is not allowed to access this resource",
                caller.role
            )));
        }

        let faculty = self
            .fetch_identity(&input.faculty_id)?
            .ok_or_else(|| GroupsError::NotFound(format!("identity {}", input.faculty_id)))?;
        if faculty.role != Role::Faculty {
            return Err(GroupsError::Validation(
                "facultyId must reference a faculty identity".into(),
            ));
        }

        let now = now_rfc3339();
        let course_group = CourseGroup {
            id: new_id(),
            course_code: input.course_code,
            course_name: input.course_name,
            semester: input.semester,
            faculty: Some(faculty.id),
            class_group: class_group.id.clone(),
            students: class_group.students.clone(),
            created_at: now.clone(),
            updated_at: now,
        };

        docs::insert_doc(
            self.store.as_ref(),
            "course_groups",
            &course_group.id,
            &[
                ("course_code", Value::Text(course_group.course_code.clone())),
                ("class_group", Value::Text(course_group.class_group.clone())),
                ("created_at", Value::Text(course_group.created_at.clone())),
                ("updated_at", Value::Text(course_group.updated_at.clone())),
            ],
            &course_group,
        )?;

        Ok(course_group)
    }

    /// Get a course group by id.
    pub fn get_course_group(&self, id: &str) -> Result<CourseGroup, GroupsError> {
        docs::get_doc(self.store.as_ref(), "course_groups", id)?
            .ok_or_else(|| GroupsError::NotFound(format!("course group {id}")))
    }

    /// List course groups, optionally scoped to a class group.
    pub fn list_course_groups(
        &self,
        class_group_id: Option<&str>,
        page: &PageParams,
    ) -> Result<ListResult<CourseGroup>, GroupsError> {
        let mut filters: Vec<(&str, Value)> = Vec::new();
        if let Some(class_id) = class_group_id {
            filters.push(("class_group", Value::Text(class_id.to_string())));
        }
        let (items, total) = docs::list_docs(
            self.store.as_ref(),
            "course_groups",
            &filters,
            page.limit(),
            page.offset(),
        )?;
        Ok(ListResult { items, total })
    }
}
