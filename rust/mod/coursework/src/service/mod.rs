pub mod assignment;
pub mod attendance;
pub mod schema;
pub mod submission;

#[cfg(test)]
pub(crate) mod testutil;

use std::sync::Arc;

use thiserror::Error;

use campus_auth::model::Identity;
use campus_groups::model::CourseGroup;
use campus_groups::service::{GroupsError, GroupsService};
use campus_store::{DocStore, StoreError};

/// Coursework service error type.
#[derive(Debug, Error)]
pub enum CourseworkError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("validation: {0}")]
    Validation(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("storage: {0}")]
    Storage(String),

    #[error("internal: {0}")]
    Internal(String),
}

impl From<CourseworkError> for campus_core::ServiceError {
    fn from(e: CourseworkError) -> Self {
        match e {
            CourseworkError::NotFound(m) => campus_core::ServiceError::NotFound(m),
            CourseworkError::Conflict(m) => campus_core::ServiceError::Conflict(m),
            CourseworkError::Validation(m) => campus_core::ServiceError::Validation(m),
            CourseworkError::Forbidden(m) => campus_core::ServiceError::PermissionDenied(m),
            CourseworkError::Storage(m) => campus_core::ServiceError::Storage(m),
            CourseworkError::Internal(m) => campus_core::ServiceError::Internal(m),
        }
    }
}

impl From<StoreError> for CourseworkError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Conflict(m) => CourseworkError::Conflict(m),
            StoreError::Document(m) => CourseworkError::Internal(m),
            other => CourseworkError::Storage(other.to_string()),
        }
    }
}

impl From<GroupsError> for CourseworkError {
    fn from(e: GroupsError) -> Self {
        match e {
            GroupsError::NotFound(m) => CourseworkError::NotFound(m),
            GroupsError::Conflict(m) => CourseworkError::Conflict(m),
            GroupsError::Validation(m) => CourseworkError::Validation(m),
            GroupsError::Forbidden(m) => CourseworkError::Forbidden(m),
            GroupsError::Storage(m) => CourseworkError::Storage(m),
            GroupsError::Internal(m) => CourseworkError::Internal(m),
        }
    }
}

/// The coursework service. Owns assignments, submissions and
/// attendance; delegates membership verdicts to the groups service.
pub struct CourseworkService {
    pub(crate) store: Arc<dyn DocStore>,
    pub(crate) groups: Arc<GroupsService>,
}

impl CourseworkService {
    /// Create a new CourseworkService, initializing the DB schema.
    pub fn new(
        store: Arc<dyn DocStore>,
        groups: Arc<GroupsService>,
    ) -> Result<Arc<Self>, CourseworkError> {
        schema::init_schema(store.as_ref())?;
        Ok(Arc::new(Self { store, groups }))
    }

    /// Fetch a course group and require the caller to be its assigned
    /// faculty. Shared by assignment creation, submission listing,
    /// grading and attendance recording.
    pub(crate) fn require_course_faculty(
        &self,
        identity: &Identity,
        course_group_id: &str,
    ) -> Result<CourseGroup, CourseworkError> {
        let course = self.groups.get_course_group(course_group_id)?;
        if course.faculty.as_deref() != Some(identity.id.as_str()) {
            return Err(CourseworkError::Forbidden(
                "You do not have permission to manage this course group".into(),
            ));
        }
        Ok(course)
    }
}
