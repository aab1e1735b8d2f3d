use chrono::{DateTime, SecondsFormat};

use campus_auth::model::Identity;
use campus_core::{ListResult, PageParams, new_id, now_rfc3339};
use campus_groups::model::GroupKind;
use campus_store::{Value, docs};

use crate::model::{Assignment, CreateAssignment};
use crate::service::{CourseworkError, CourseworkService};

impl CourseworkService {
    /// Set an assignment for a course group. The caller must be the
    /// course group's assigned faculty.
    pub fn create_assignment(
        &self,
        identity: &Identity,
        input: CreateAssignment,
    ) -> Result<Assignment, CourseworkError> {
        if input.course_group_id.is_empty() || input.title.is_empty() || input.due_at.is_empty() {
            return Err(CourseworkError::Validation(
                "Please provide courseGroupId, title and dueAt".into(),
            ));
        }
        // Normalize the deadline to UTC with fixed precision so the
        // lateness check can compare strings.
        let due_at = DateTime::parse_from_rfc3339(&input.due_at)
            .map_err(|_| {
                CourseworkError::Validation("dueAt must be an RFC 3339 timestamp".into())
            })?
            .to_utc()
            .to_rfc3339_opts(SecondsFormat::Micros, true);

        self.require_course_faculty(identity, &input.course_group_id)?;

        let now = now_rfc3339();
        let assignment = Assignment {
            id: new_id(),
            course_group: input.course_group_id,
            title: input.title,
            description: input.description,
            due_at,
            created_by: identity.id.clone(),
            created_at: now.clone(),
            updated_at: now,
        };
        docs::insert_doc(
            self.store.as_ref(),
            "assignments",
            &assignment.id,
            &[
                ("course_group", Value::Text(assignment.course_group.clone())),
                ("created_by", Value::Text(assignment.created_by.clone())),
                ("created_at", Value::Text(assignment.created_at.clone())),
                ("updated_at", Value::Text(assignment.updated_at.clone())),
            ],
            &assignment,
        )?;
        Ok(assignment)
    }

    /// Get an assignment by id.
    pub fn get_assignment(&self, id: &str) -> Result<Assignment, CourseworkError> {
        docs::get_doc(self.store.as_ref(), "assignments", id)?
            .ok_or_else(|| CourseworkError::NotFound(format!("assignment {id}")))
    }

    /// List a course group's assignments, newest first. The caller must
    /// hold a relationship to the course group.
    pub fn list_assignments(
        &self,
        identity: &Identity,
        course_group_id: Option<&str>,
        page: &PageParams,
    ) -> Result<ListResult<Assignment>, CourseworkError> {
        let Some(course_group_id) = course_group_id.filter(|s| !s.is_empty()) else {
            return Err(CourseworkError::Validation("Please provide courseGroupId".into()));
        };
        if !self
            .groups
            .has_access(identity, GroupKind::CourseGroup, course_group_id)?
        {
            return Err(CourseworkError::Forbidden(
                "You do not have permission to read assignments from this group".into(),
            ));
        }

        let (items, total) = docs::list_docs(
            self.store.as_ref(),
            "assignments",
            &[("course_group", Value::Text(course_group_id.to_string()))],
            page.limit(),
            page.offset(),
        )?;
        Ok(ListResult { items, total })
    }
}

#[cfg(test)]
mod tests {
    use campus_core::PageParams;

    use crate::model::CreateAssignment;
    use crate::service::CourseworkError;
    use crate::service::testutil::TestCourse;

    fn assignment_input(course_id: &str, due_at: &str) -> CreateAssignment {
        CreateAssignment {
            course_group_id: course_id.into(),
            title: "Lab 1".into(),
            description: "Implement a shell".into(),
            due_at: due_at.into(),
        }
    }

    #[test]
    fn test_course_faculty_sets_assignment() {
        let t = TestCourse::new();
        let assignment = t
            .coursework
            .create_assignment(
                &t.faculty,
                assignment_input(&t.course_id, "2026-09-01T23:59:59+05:30"),
            )
            .unwrap();
        assert_eq!(assignment.created_by, t.faculty.id);
        // Deadline normalized to UTC.
        assert_eq!(assignment.due_at, "2026-09-01T18:29:59.000000Z");

        let listed = t
            .coursework
            .list_assignments(&t.student, Some(&t.course_id), &PageParams::default())
            .unwrap();
        assert_eq!(listed.total, 1);
        assert_eq!(listed.items[0].title, "Lab 1");
    }

    #[test]
    fn test_only_course_faculty_may_set() {
        let t = TestCourse::new();
        let err = t
            .coursework
            .create_assignment(
                &t.other_faculty,
                assignment_input(&t.course_id, "2026-09-01T00:00:00Z"),
            )
            .unwrap_err();
        match err {
            CourseworkError::Forbidden(reason) => {
                assert_eq!(reason, "You do not have permission to manage this course group");
            }
            other => panic!("expected Forbidden, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_deadline_rejected() {
        let t = TestCourse::new();
        let err = t
            .coursework
            .create_assignment(&t.faculty, assignment_input(&t.course_id, "tomorrow"))
            .unwrap_err();
        assert!(matches!(err, CourseworkError::Validation(_)));
    }

    #[test]
    fn test_non_member_cannot_list() {
        let t = TestCourse::new();
        t.coursework
            .create_assignment(
                &t.faculty,
                assignment_input(&t.course_id, "2026-09-01T00:00:00Z"),
            )
            .unwrap();
        let err = t
            .coursework
            .list_assignments(&t.outsider, Some(&t.course_id), &PageParams::default())
            .unwrap_err();
        assert!(matches!(err, CourseworkError::Forbidden(_)));
    }
}
