use campus_auth::model::Identity;
use campus_core::{ListResult, PageParams, new_id, now_rfc3339};
use campus_groups::model::GroupKind;
use campus_store::{Value, docs};

use crate::model::{Grade, GradeSubmission, SubmitWork, Submission, SubmissionStatus};
use crate::service::{CourseworkError, CourseworkService};

impl CourseworkService {
    /// Submit work for an assignment. One submission per student;
    /// resubmitting before grading replaces it, after grading conflicts.
    pub fn submit_work(
        &self,
        identity: &Identity,
        assignment_id: &str,
        input: SubmitWork,
    ) -> Result<Submission, CourseworkError> {
        if input.content.is_empty() {
            return Err(CourseworkError::Validation("Please provide content".into()));
        }
        let assignment = self.get_assignment(assignment_id)?;
        if !self
            .groups
            .has_access(identity, GroupKind::CourseGroup, &assignment.course_group)?
        {
            return Err(CourseworkError::Forbidden(
                "You do not have permission to submit to this assignment".into(),
            ));
        }

        let submitted_at = now_rfc3339();
        // Both sides are UTC RFC 3339 with fixed precision.
        let late = submitted_at.as_str() > assignment.due_at.as_str();

        match self.find_submission(assignment_id, &identity.id)? {
            Some(mut submission) => {
                if submission.status == SubmissionStatus::Graded {
                    return Err(CourseworkError::Conflict(
                        "Submission has already been graded".into(),
                    ));
                }
                submission.content = input.content;
                submission.submitted_at = submitted_at;
                submission.late = late;
                self.save_submission(&submission)?;
                Ok(submission)
            }
            None => {
                let submission = Submission {
                    id: new_id(),
                    assignment: assignment.id,
                    student: identity.id.clone(),
                    content: input.content,
                    submitted_at,
                    late,
                    status: SubmissionStatus::Submitted,
                    grade: None,
                };
                docs::insert_doc(
                    self.store.as_ref(),
                    "submissions",
                    &submission.id,
                    &[
                        ("assignment", Value::Text(submission.assignment.clone())),
                        ("student", Value::Text(submission.student.clone())),
                        ("status", Value::Text(submission.status.as_str().to_string())),
                        ("created_at", Value::Text(submission.submitted_at.clone())),
                    ],
                    &submission,
                )?;
                Ok(submission)
            }
        }
    }

    /// List an assignment's submissions, newest first. Course faculty
    /// only.
    pub fn list_submissions(
        &self,
        identity: &Identity,
        assignment_id: &str,
        page: &PageParams,
    ) -> Result<ListResult<Submission>, CourseworkError> {
        let assignment = self.get_assignment(assignment_id)?;
        self.require_course_faculty(identity, &assignment.course_group)?;

        let (items, total) = docs::list_docs(
            self.store.as_ref(),
            "submissions",
            &[("assignment", Value::Text(assignment.id))],
            page.limit(),
            page.offset(),
        )?;
        Ok(ListResult { items, total })
    }

    /// Get the caller's own submission for an assignment.
    pub fn my_submission(
        &self,
        identity: &Identity,
        assignment_id: &str,
    ) -> Result<Submission, CourseworkError> {
        self.get_assignment(assignment_id)?;
        self.find_submission(assignment_id, &identity.id)?.ok_or_else(|| {
            CourseworkError::NotFound(format!("submission for assignment {assignment_id}"))
        })
    }

    /// Mark a submission. Grading freezes it; a second grade is a
    /// conflict.
    pub fn grade_submission(
        &self,
        identity: &Identity,
        submission_id: &str,
        input: GradeSubmission,
    ) -> Result<Submission, CourseworkError> {
        let Some(marks) = input.marks else {
            return Err(CourseworkError::Validation("Please provide marks".into()));
        };
        if marks > 100 {
            return Err(CourseworkError::Validation(
                "marks must be between 0 and 100".into(),
            ));
        }

        let mut submission: Submission =
            docs::get_doc(self.store.as_ref(), "submissions", submission_id)?
                .ok_or_else(|| CourseworkError::NotFound(format!("submission {submission_id}")))?;
        let assignment = self.get_assignment(&submission.assignment)?;
        self.require_course_faculty(identity, &assignment.course_group)?;

        if submission.status == SubmissionStatus::Graded {
            return Err(CourseworkError::Conflict(
                "Submission has already been graded".into(),
            ));
        }
        submission.status = SubmissionStatus::Graded;
        submission.grade = Some(Grade {
            marks,
            feedback: input.feedback,
            graded_by: identity.id.clone(),
            graded_at: now_rfc3339(),
        });
        self.save_submission(&submission)?;
        Ok(submission)
    }

    fn find_submission(
        &self,
        assignment_id: &str,
        student_id: &str,
    ) -> Result<Option<Submission>, CourseworkError> {
        let rows = self.store.query(
            "SELECT data FROM submissions WHERE assignment = ?1 AND student = ?2 LIMIT 1",
            &[
                Value::Text(assignment_id.to_string()),
                Value::Text(student_id.to_string()),
            ],
        )?;
        match rows.first().and_then(|r| r.get_str("data")) {
            Some(data) => Ok(Some(
                serde_json::from_str(data).map_err(|e| CourseworkError::Internal(e.to_string()))?,
            )),
            None => Ok(None),
        }
    }

    fn save_submission(&self, submission: &Submission) -> Result<(), CourseworkError> {
        let updated = docs::update_doc(
            self.store.as_ref(),
            "submissions",
            &submission.id,
            &[
                ("status", Value::Text(submission.status.as_str().to_string())),
                ("created_at", Value::Text(submission.submitted_at.clone())),
            ],
            submission,
        )?;
        if !updated {
            return Err(CourseworkError::NotFound(format!(
                "submission {}",
                submission.id
            )));
        }
        Ok(())
    }
}
