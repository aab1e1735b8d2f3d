//! Groups module — departments, class groups, course groups, and the
//! group-scoped access decisions built on top of them.
//!
//! # Resources
//!
//! - **Department** — hod + faculties + students rosters
//! - **ClassGroup** — one admission batch, with tutor and program
//!   coordinator
//! - **CourseGroup** — one course offering, students copied from the
//!   class group at assignment time
//!
//! The service also exports [`GroupsService::has_access`] and
//! [`GroupsService::authorize_group_operation`], which the messaging
//! and coursework modules call for membership verdicts.

pub mod api;
pub mod model;
pub mod service;

use std::sync::Arc;

use axum::Router;

use campus_core::Module;
use campus_store::DocStore;

use crate::service::GroupsService;

pub use crate::service::access::GroupOp;

/// Groups module implementing the Module trait.
pub struct GroupsModule {
    service: Arc<GroupsService>,
}

impl GroupsModule {
    /// Create a new GroupsModule.
    pub fn new(store: Arc<dyn DocStore>) -> Result<Self, campus_core::ServiceError> {
        let service = GroupsService::new(store).map_err(campus_core::ServiceError::from)?;
        Ok(Self { service })
    }

    /// Get a reference to the underlying GroupsService.
    pub fn service(&self) -> &Arc<GroupsService> {
        &self.service
    }
}

impl Module for GroupsModule {
    fn name(&self) -> &str {
        "groups"
    }

    fn routes(&self) -> Router {
        api::build_router(self.service.clone())
    }
}
