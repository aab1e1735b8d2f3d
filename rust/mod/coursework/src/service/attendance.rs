use chrono::NaiveDate;

use campus_auth::model::{Identity, Role};
use campus_core::{ListResult, PageParams, new_id, now_rfc3339};
use campus_groups::model::{CourseGroup, GroupKind};
use campus_store::{Value, docs};

use crate::model::{AttendanceRecord, AttendanceSummary, RecordAttendance};
use crate::service::{CourseworkError, CourseworkService};

impl CourseworkService {
    /// Record one session's attendance sheet. Recording the same date
    /// again replaces the earlier sheet. An empty `present` list is a
    /// session nobody attended.
    pub fn record_attendance(
        &self,
        identity: &Identity,
        input: RecordAttendance,
    ) -> Result<AttendanceRecord, CourseworkError> {
        if input.course_group_id.is_empty() || input.date.is_empty() {
            return Err(CourseworkError::Validation(
                "Please provide courseGroupId, date and present".into(),
            ));
        }
        NaiveDate::parse_from_str(&input.date, "%Y-%m-%d")
            .map_err(|_| CourseworkError::Validation("date must be YYYY-MM-DD".into()))?;

        let course = self.require_course_faculty(identity, &input.course_group_id)?;
        for id in &input.present {
            if !course.students.contains(id) {
                return Err(CourseworkError::Validation(format!(
                    "Identity ({id}) is not a student of this course group"
                )));
            }
        }

        match self.find_attendance(&course.id, &input.date)? {
            Some(mut record) => {
                record.present = input.present;
                record.recorded_by = identity.id.clone();
                record.updated_at = now_rfc3339();
                let updated = docs::update_doc(
                    self.store.as_ref(),
                    "attendance",
                    &record.id,
                    &[("updated_at", Value::Text(record.updated_at.clone()))],
                    &record,
                )?;
                if !updated {
                    return Err(CourseworkError::NotFound(format!("attendance {}", record.id)));
                }
                Ok(record)
            }
            None => {
                let now = now_rfc3339();
                let record = AttendanceRecord {
                    id: new_id(),
                    course_group: course.id,
                    date: input.date,
                    present: input.present,
                    recorded_by: identity.id.clone(),
                    created_at: now.clone(),
                    updated_at: now,
                };
                docs::insert_doc(
                    self.store.as_ref(),
                    "attendance",
                    &record.id,
                    &[
                        ("course_group", Value::Text(record.course_group.clone())),
                        ("date", Value::Text(record.date.clone())),
                        ("created_at", Value::Text(record.created_at.clone())),
                        ("updated_at", Value::Text(record.updated_at.clone())),
                    ],
                    &record,
                )?;
                Ok(record)
            }
        }
    }

    /// List a course group's attendance sheets, most recent session
    /// first. Visible to the course faculty and the HOD of the owning
    /// department.
    pub fn list_attendance(
        &self,
        identity: &Identity,
        course_group_id: Option<&str>,
        page: &PageParams,
    ) -> Result<ListResult<AttendanceRecord>, CourseworkError> {
        let Some(course_group_id) = course_group_id.filter(|s| !s.is_empty()) else {
            return Err(CourseworkError::Validation("Please provide courseGroupId".into()));
        };
        let course = self.groups.get_course_group(course_group_id)?;
        if !self.can_view_attendance(identity, &course)? {
            return Err(CourseworkError::Forbidden(
                "You do not have permission to read attendance for this course group".into(),
            ));
        }

        let params = [Value::Text(course.id.clone())];
        let total = self
            .store
            .query("SELECT COUNT(*) AS n FROM attendance WHERE course_group = ?1", &params)?
            .first()
            .and_then(|r| r.get_i64("n"))
            .unwrap_or(0) as usize;
        let sql = format!(
            "SELECT data FROM attendance WHERE course_group = ?1
             ORDER BY date DESC LIMIT {} OFFSET {}",
            page.limit(),
            page.offset()
        );
        let rows = self.store.query(&sql, &params)?;
        let mut items = Vec::with_capacity(rows.len());
        for row in &rows {
            if let Some(data) = row.get_str("data") {
                let record: AttendanceRecord = serde_json::from_str(data)
                    .map_err(|e| CourseworkError::Internal(e.to_string()))?;
                items.push(record);
            }
        }
        Ok(ListResult { items, total })
    }

    /// The caller's own attendance counts for a course group.
    pub fn my_attendance(
        &self,
        identity: &Identity,
        course_group_id: Option<&str>,
    ) -> Result<AttendanceSummary, CourseworkError> {
        let Some(course_group_id) = course_group_id.filter(|s| !s.is_empty()) else {
            return Err(CourseworkError::Validation("Please provide courseGroupId".into()));
        };
        if !self
            .groups
            .has_access(identity, GroupKind::CourseGroup, course_group_id)?
        {
            return Err(CourseworkError::Forbidden(
                "You do not have permission to read attendance for this course group".into(),
            ));
        }

        let rows = self.store.query(
            "SELECT data FROM attendance WHERE course_group = ?1",
            &[Value::Text(course_group_id.to_string())],
        )?;
        let mut held = 0;
        let mut attended = 0;
        for row in &rows {
            if let Some(data) = row.get_str("data") {
                let record: AttendanceRecord = serde_json::from_str(data)
                    .map_err(|e| CourseworkError::Internal(e.to_string()))?;
                held += 1;
                if record.present.iter().any(|p| p == &identity.id) {
                    attended += 1;
                }
            }
        }
        Ok(AttendanceSummary { held, attended })
    }

    fn can_view_attendance(
        &self,
        identity: &Identity,
        course: &CourseGroup,
    ) -> Result<bool, CourseworkError> {
        if course.faculty.as_deref() == Some(identity.id.as_str()) {
            return Ok(true);
        }
        // HODs see attendance for courses taught under their department.
        if identity.role == Role::Hod {
            let class = self.groups.get_class_group(&course.class_group)?;
            let dept = self.groups.get_department(&class.department)?;
            return Ok(dept.hod.as_deref() == Some(identity.id.as_str()));
        }
        Ok(false)
    }

    fn find_attendance(
        &self,
        course_group_id: &str,
        date: &str,
    ) -> Result<Option<AttendanceRecord>, CourseworkError> {
        let rows = self.store.query(
            "SELECT data FROM attendance WHERE course_group = ?1 AND date = ?2 LIMIT 1",
            &[
                Value::Text(course_group_id.to_string()),
                Value::Text(date.to_string()),
            ],
        )?;
        match rows.first().and_then(|r| r.get_str("data")) {
            Some(data) => Ok(Some(
                serde_json::from_str(data).map_err(|e| CourseworkError::Internal(e.to_string()))?,
            )),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use campus_core::PageParams;

    use crate::model::RecordAttendance;
    use crate::service::CourseworkError;
    use crate::service::testutil::TestCourse;

    fn sheet(t: &TestCourse, date: &str, present: Vec<String>) -> RecordAttendance {
        RecordAttendance {
            course_group_id: t.course_id.clone(),
            date: date.into(),
            present,
        }
    }

    #[test]
    fn test_record_and_summarize() {
        let t = TestCourse::new();
        t.coursework
            .record_attendance(&t.faculty, sheet(&t, "2026-08-20", vec![t.student.id.clone()]))
            .unwrap();
        t.coursework
            .record_attendance(&t.faculty, sheet(&t, "2026-08-21", vec![]))
            .unwrap();

        let summary = t
            .coursework
            .my_attendance(&t.student, Some(&t.course_id))
            .unwrap();
        assert_eq!(summary.held, 2);
        assert_eq!(summary.attended, 1);
    }

    #[test]
    fn test_same_date_replaces() {
        let t = TestCourse::new();
        t.coursework
            .record_attendance(&t.faculty, sheet(&t, "2026-08-20", vec![]))
            .unwrap();
        let replaced = t
            .coursework
            .record_attendance(&t.faculty, sheet(&t, "2026-08-20", vec![t.student.id.clone()]))
            .unwrap();
        assert_eq!(replaced.present, vec![t.student.id.clone()]);

        let listed = t
            .coursework
            .list_attendance(&t.faculty, Some(&t.course_id), &PageParams::default())
            .unwrap();
        assert_eq!(listed.total, 1);
        assert_eq!(listed.items[0].present, vec![t.student.id.clone()]);
    }

    #[test]
    fn test_hod_of_owning_department_can_view() {
        let t = TestCourse::new();
        t.coursework
            .record_attendance(&t.faculty, sheet(&t, "2026-08-20", vec![]))
            .unwrap();

        let listed = t
            .coursework
            .list_attendance(&t.hod, Some(&t.course_id), &PageParams::default())
            .unwrap();
        assert_eq!(listed.total, 1);

        let err = t
            .coursework
            .list_attendance(&t.other_faculty, Some(&t.course_id), &PageParams::default())
            .unwrap_err();
        assert!(matches!(err, CourseworkError::Forbidden(_)));
    }

    #[test]
    fn test_only_course_students_marked_present() {
        let t = TestCourse::new();
        let err = t
            .coursework
            .record_attendance(
                &t.faculty,
                sheet(&t, "2026-08-20", vec![t.outsider.id.clone()]),
            )
            .unwrap_err();
        assert!(matches!(err, CourseworkError::Validation(_)));
    }

    #[test]
    fn test_malformed_date_rejected() {
        let t = TestCourse::new();
        let err = t
            .coursework
            .record_attendance(&t.faculty, sheet(&t, "20/08/2026", vec![]))
            .unwrap_err();
        match err {
            CourseworkError::Validation(reason) => {
                assert_eq!(reason, "date must be YYYY-MM-DD");
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_non_member_summary_denied() {
        let t = TestCourse::new();
        let err = t
            .coursework
            .my_attendance(&t.outsider, Some(&t.course_id))
            .unwrap_err();
        assert!(matches!(err, CourseworkError::Forbidden(_)));
    }
}
