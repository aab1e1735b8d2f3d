pub mod identity;
pub mod password;
pub mod schema;
pub mod session;

use std::sync::Arc;

use thiserror::Error;

use campus_store::{DocStore, StoreError};

/// Auth service error type.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("validation: {0}")]
    Validation(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("storage: {0}")]
    Storage(String),

    #[error("internal: {0}")]
    Internal(String),
}

impl From<AuthError> for campus_core::ServiceError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::NotFound(m) => campus_core::ServiceError::NotFound(m),
            AuthError::Conflict(m) => campus_core::ServiceError::Conflict(m),
            AuthError::Validation(m) => campus_core::ServiceError::Validation(m),
            AuthError::Unauthorized(m) => campus_core::ServiceError::Unauthorized(m),
            AuthError::Forbidden(m) => campus_core::ServiceError::PermissionDenied(m),
            AuthError::Storage(m) => campus_core::ServiceError::Storage(m),
            AuthError::Internal(m) => campus_core::ServiceError::Internal(m),
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Conflict(m) => AuthError::Conflict(m),
            StoreError::Document(m) => AuthError::Internal(m),
            other => AuthError::Storage(other.to_string()),
        }
    }
}

/// Configuration for the auth service.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// JWT signing secret.
    pub jwt_secret: String,
    /// Token lifetime in seconds (default: 7 days).
    pub token_ttl: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "campus-dev-secret-change-me".to_string(),
            token_ttl: 7 * 24 * 3600,
        }
    }
}

/// The auth service. Owns identity and session records.
pub struct AuthService {
    pub(crate) store: Arc<dyn DocStore>,
    pub(crate) config: AuthConfig,
}

impl AuthService {
    /// Create a new AuthService, initializing the DB schema.
    pub fn new(store: Arc<dyn DocStore>, config: AuthConfig) -> Result<Arc<Self>, AuthError> {
        schema::init_schema(store.as_ref())?;
        Ok(Arc::new(Self { store, config }))
    }
}
