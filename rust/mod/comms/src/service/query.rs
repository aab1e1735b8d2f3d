use campus_auth::model::Identity;
use campus_core::{ListResult, PageParams, new_id, now_rfc3339};
use campus_groups::model::GroupKind;
use campus_store::{Value, docs};

use crate::model::{PostQuery, Query, QueryResponse, QueryStatus, RespondQuery};
use crate::service::{CommsError, CommsService};

impl CommsService {
    /// Raise a query addressed to a department inbox. Any student may
    /// ask any department; the target only has to exist.
    pub fn raise_query(&self, identity: &Identity, input: PostQuery) -> Result<Query, CommsError> {
        if input.department_id.is_empty() || input.subject.is_empty() || input.content.is_empty() {
            return Err(CommsError::Validation(
                "Please provide departmentId, subject and content".into(),
            ));
        }
        self.groups.get_department(&input.department_id)?;

        let now = now_rfc3339();
        let query = Query {
            id: new_id(),
            student: identity.id.clone(),
            department: input.department_id,
            subject: input.subject,
            content: input.content,
            status: QueryStatus::Open,
            response: None,
            created_at: now.clone(),
            updated_at: now,
        };
        docs::insert_doc(
            self.store.as_ref(),
            "queries",
            &query.id,
            &[
                ("student", Value::Text(query.student.clone())),
                ("department", Value::Text(query.department.clone())),
                ("status", Value::Text(query.status.as_str().to_string())),
                ("created_at", Value::Text(query.created_at.clone())),
                ("updated_at", Value::Text(query.updated_at.clone())),
            ],
            &query,
        )?;
        Ok(query)
    }

    /// List a department's query inbox, newest first. Staff only; the
    /// caller must belong to that department.
    pub fn list_department_queries(
        &self,
        identity: &Identity,
        department_id: Option<&str>,
        page: &PageParams,
    ) -> Result<ListResult<Query>, CommsError> {
        let Some(department_id) = department_id.filter(|s| !s.is_empty()) else {
            return Err(CommsError::Validation("Please provide departmentId".into()));
        };
        if !self
            .groups
            .has_access(identity, GroupKind::Department, department_id)?
        {
            return Err(CommsError::Forbidden(
                "You do not have permission to read queries from this department".into(),
            ));
        }

        let (items, total) = docs::list_docs(
            self.store.as_ref(),
            "queries",
            &[("department", Value::Text(department_id.to_string()))],
            page.limit(),
            page.offset(),
        )?;
        Ok(ListResult { items, total })
    }

    /// List the caller's own queries, newest first.
    pub fn list_my_queries(
        &self,
        identity: &Identity,
        page: &PageParams,
    ) -> Result<ListResult<Query>, CommsError> {
        let (items, total) = docs::list_docs(
            self.store.as_ref(),
            "queries",
            &[("student", Value::Text(identity.id.clone()))],
            page.limit(),
            page.offset(),
        )?;
        Ok(ListResult { items, total })
    }

    /// Answer an open query. Answering is terminal: a second response is
    /// a conflict, not a replacement.
    pub fn respond_to_query(
        &self,
        identity: &Identity,
        query_id: &str,
        input: RespondQuery,
    ) -> Result<Query, CommsError> {
        if input.content.is_empty() {
            return Err(CommsError::Validation("Please provide content".into()));
        }
        let mut query: Query = docs::get_doc(self.store.as_ref(), "queries", query_id)?
            .ok_or_else(|| CommsError::NotFound(format!("query {query_id}")))?;

        if !self
            .groups
            .has_access(identity, GroupKind::Department, &query.department)?
        {
            return Err(CommsError::Forbidden(
                "You do not have permission to respond to queries from this department".into(),
            ));
        }
        if query.status == QueryStatus::Answered {
            return Err(CommsError::Conflict("Query has already been answered".into()));
        }

        query.status = QueryStatus::Answered;
        query.updated_at = now_rfc3339();
        query.response = Some(QueryResponse {
            responder: identity.id.clone(),
            content: input.content,
            responded_at: query.updated_at.clone(),
        });
        let updated = docs::update_doc(
            self.store.as_ref(),
            "queries",
            &query.id,
            &[
                ("status", Value::Text(query.status.as_str().to_string())),
                ("updated_at", Value::Text(query.updated_at.clone())),
            ],
            &query,
        )?;
        if !updated {
            return Err(CommsError::NotFound(format!("query {query_id}")));
        }
        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use campus_core::PageParams;

    use crate::model::{PostQuery, QueryStatus, RespondQuery};
    use crate::service::CommsError;
    use crate::service::testutil::TestCampus;

    fn ask(campus: &TestCampus, subject: &str) -> crate::model::Query {
        campus
            .comms
            .raise_query(&campus.student, PostQuery {
                department_id: campus.dept_id.clone(),
                subject: subject.into(),
                content: "please clarify".into(),
            })
            .unwrap()
    }

    #[test]
    fn test_raise_and_inbox_listing() {
        let campus = TestCampus::new();
        ask(&campus, "Exam dates");

        let inbox = campus
            .comms
            .list_department_queries(&campus.hod, Some(&campus.dept_id), &PageParams::default())
            .unwrap();
        assert_eq!(inbox.total, 1);
        assert_eq!(inbox.items[0].subject, "Exam dates");
        assert_eq!(inbox.items[0].status, QueryStatus::Open);

        let mine = campus
            .comms
            .list_my_queries(&campus.student, &PageParams::default())
            .unwrap();
        assert_eq!(mine.total, 1);
    }

    #[test]
    fn test_inbox_requires_department_membership() {
        let campus = TestCampus::new();
        ask(&campus, "Exam dates");
        let err = campus
            .comms
            .list_department_queries(
                &campus.outsider,
                Some(&campus.dept_id),
                &PageParams::default(),
            )
            .unwrap_err();
        match err {
            CommsError::Forbidden(reason) => {
                assert_eq!(
                    reason,
                    "You do not have permission to read queries from this department"
                );
            }
            other => panic!("expected Forbidden, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_department_is_not_found() {
        let campus = TestCampus::new();
        let err = campus
            .comms
            .raise_query(&campus.student, PostQuery {
                department_id: "nope".into(),
                subject: "Exam dates".into(),
                content: "please clarify".into(),
            })
            .unwrap_err();
        assert!(matches!(err, CommsError::NotFound(_)));
    }

    #[test]
    fn test_respond_marks_answered_and_is_terminal() {
        let campus = TestCampus::new();
        let query = ask(&campus, "Exam dates");

        let answered = campus
            .comms
            .respond_to_query(&campus.faculty, &query.id, RespondQuery {
                content: "Next Monday".into(),
            })
            .unwrap();
        assert_eq!(answered.status, QueryStatus::Answered);
        let response = answered.response.expect("response recorded");
        assert_eq!(response.responder, campus.faculty.id);
        assert_eq!(response.content, "Next Monday");

        let err = campus
            .comms
            .respond_to_query(&campus.hod, &query.id, RespondQuery {
                content: "Already told you".into(),
            })
            .unwrap_err();
        match err {
            CommsError::Conflict(reason) => {
                assert_eq!(reason, "Query has already been answered");
            }
            other => panic!("expected Conflict, got {:?}", other),
        }
    }

    #[test]
    fn test_respond_requires_membership() {
        let campus = TestCampus::new();
        let query = ask(&campus, "Exam dates");
        let err = campus
            .comms
            .respond_to_query(&campus.outsider, &query.id, RespondQuery {
                content: "Next Monday".into(),
            })
            .unwrap_err();
        assert!(matches!(err, CommsError::Forbidden(_)));
    }
}
