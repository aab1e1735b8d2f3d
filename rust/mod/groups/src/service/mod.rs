pub mod access;
pub mod class_group;
pub mod course_group;
pub mod department;
pub mod schema;

#[cfg(test)]
pub(crate) mod testutil;

use std::sync::Arc;

use thiserror::Error;

use campus_store::{DocStore, StoreError};

/// Groups service error type.
#[derive(Debug, Error)]
pub enum GroupsError {
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

impl From<GroupsError> for campus_core::ServiceError {
    fn from(e: GroupsError) -> Self {
        match e {
            GroupsError::NotFound(m) => campus_core::ServiceError::NotFound(m),
            GroupsError::Conflict(m) => campus_core::ServiceError::Conflict(m),
            GroupsError::Validation(m) => campus_core::ServiceError::Validation(m),
            GroupsError::Forbidden(m) => campus_core::ServiceError::PermissionDenied(m),
            GroupsError::Storage(m) => campus_core::ServiceError::Storage(m),
            GroupsError::Internal(m) => campus_core::ServiceError::Internal(m),
        }
    }
}

impl From<StoreError> for GroupsError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Conflict(m) => GroupsError::Conflict(m),
            StoreError::Document(m) => GroupsError::Internal(m),
            other => GroupsError::Storage(other.to_string()),
        }
    }
}

/// The groups service. Owns department, class group and course group
/// records, and answers every group membership question in the portal.
pub struct GroupsService {
    pub(crate) store: Arc<dyn DocStore>,
}

impl GroupsService {
    /// Create a new GroupsService, initializing the DB schema.
    pub fn new(store: Arc<dyn DocStore>) -> Result<Arc<Self>, GroupsError> {
        schema::init_schema(store.as_ref())?;
        Ok(Arc::new(Self { store }))
    }

    /// Fetch an identity document from the auth module's table. Used to
    /// validate assignment targets (HOD, tutor, coordinator, faculty).
    pub(crate) fn fetch_identity(
        &self,
        id: &str,
    ) -> Result<Option<campus_auth::model::Identity>, GroupsError> {
        Ok(campus_store::docs::get_doc(
            self.store.as_ref(),
            "identities",
            id,
        )?)
    }
}
