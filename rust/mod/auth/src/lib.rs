//! Auth module — identities, sessions, and the role gate.
//!
//! # Resources
//!
//! - **Identity** — a portal member with one of five roles
//!   (student/faculty/hod/principal/admin)
//! - **Session** — JWT issuance record, revocable on logout
//!
//! The module also exports [`gate`], the per-route role allow-list the
//! other modules attach as a `route_layer`.

pub mod api;
pub mod gate;
pub mod model;
pub mod service;

use std::sync::Arc;

use axum::Router;

use campus_core::Module;
use campus_store::DocStore;

use crate::service::{AuthConfig, AuthService};

/// Auth module implementing the Module trait.
pub struct AuthModule {
    service: Arc<AuthService>,
}

impl AuthModule {
    /// Create a new AuthModule.
    pub fn new(
        store: Arc<dyn DocStore>,
        config: AuthConfig,
    ) -> Result<Self, campus_core::ServiceError> {
        let service = AuthService::new(store, config).map_err(campus_core::ServiceError::from)?;
        Ok(Self { service })
    }

    /// Get a reference to the underlying AuthService.
    pub fn service(&self) -> &Arc<AuthService> {
        &self.service
    }
}

impl Module for AuthModule {
    fn name(&self) -> &str {
        "auth"
    }

    fn routes(&self) -> Router {
        api::build_router(self.service.clone())
    }
}
