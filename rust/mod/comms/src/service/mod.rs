pub mod announcement;
pub mod circular;
pub mod message;
pub mod query;
pub mod schema;

#[cfg(test)]
pub(crate) mod testutil;

use std::sync::Arc;

use thiserror::Error;

use campus_groups::service::{GroupsError, GroupsService};
use campus_store::{DocStore, StoreError};

/// Comms service error type.
#[derive(Debug, Error)]
pub enum CommsError {
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

impl From<CommsError> for campus_core::ServiceError {
    fn from(e: CommsError) -> Self {
        match e {
            CommsError::NotFound(m) => campus_core::ServiceError::NotFound(m),
            CommsError::Conflict(m) => campus_core::ServiceError::Conflict(m),
            CommsError::Validation(m) => campus_core::ServiceError::Validation(m),
            CommsError::Forbidden(m) => campus_core::ServiceError::PermissionDenied(m),
            CommsError::Storage(m) => campus_core::ServiceError::Storage(m),
            CommsError::Internal(m) => campus_core::ServiceError::Internal(m),
        }
    }
}

impl From<StoreError> for CommsError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Conflict(m) => CommsError::Conflict(m),
            StoreError::Document(m) => CommsError::Internal(m),
            other => CommsError::Storage(other.to_string()),
        }
    }
}

impl From<GroupsError> for CommsError {
    fn from(e: GroupsError) -> Self {
        match e {
            GroupsError::NotFound(m) => CommsError::NotFound(m),
            GroupsError::Conflict(m) => CommsError::Conflict(m),
            GroupsError::Validation(m) => CommsError::Validation(m),
            GroupsError::Forbidden(m) => CommsError::Forbidden(m),
            GroupsError::Storage(m) => CommsError::Storage(m),
            GroupsError::Internal(m) => CommsError::Internal(m),
        }
    }
}

/// The comms service. Owns messages, announcements, circulars and
/// queries; delegates every membership verdict to the groups service.
pub struct CommsService {
    pub(crate) store: Arc<dyn DocStore>,
    pub(crate) groups: Arc<GroupsService>,
}

impl CommsService {
    /// Create a new CommsService, initializing the DB schema.
    pub fn new(
        store: Arc<dyn DocStore>,
        groups: Arc<GroupsService>,
    ) -> Result<Arc<Self>, CommsError> {
        schema::init_schema(store.as_ref())?;
        Ok(Arc::new(Self { store, groups }))
    }
}
