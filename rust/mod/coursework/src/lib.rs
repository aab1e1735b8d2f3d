//! Coursework module — assignments, submissions, grading and
//! attendance.
//!
//! # Resources
//!
//! - **Assignment** — faculty-issued work for a course group with a
//!   due timestamp
//! - **Submission** — one per (assignment, student); resubmission
//!   before grading replaces, grading is final
//! - **Attendance** — one sheet per (course group, date); students
//!   read their own held/attended counts
//!
//! Group-scoped reads go through the groups service for their
//! membership verdict; write paths require the course group's
//! assigned faculty.

pub mod api;
pub mod model;
pub mod service;

use std::sync::Arc;

use axum::Router;

use campus_core::Module;
use campus_groups::service::GroupsService;
use campus_store::DocStore;

use crate::service::CourseworkService;

/// Coursework module implementing the Module trait.
pub struct CourseworkModule {
    service: Arc<CourseworkService>,
}

impl CourseworkModule {
    /// Create a new CourseworkModule.
    pub fn new(
        store: Arc<dyn DocStore>,
        groups: Arc<GroupsService>,
    ) -> Result<Self, campus_core::ServiceError> {
        let service =
            CourseworkService::new(store, groups).map_err(campus_core::ServiceError::from)?;
        Ok(Self { service })
    }

    /// Get a reference to the underlying CourseworkService.
    pub fn service(&self) -> &Arc<CourseworkService> {
        &self.service
    }
}

impl Module for CourseworkModule {
    fn name(&self) -> &str {
        "coursework"
    }

    fn routes(&self) -> Router {
        api::build_router(self.service.clone())
    }
}
