//! Comms module — messaging, announcements, circulars and student
//! queries.
//!
//! # Resources
//!
//! - **Message** — append-only group chat, non-admin members only
//! - **Announcement** — staff-posted, group-scoped notices
//! - **Circular** — college-wide notices from the principal's office,
//!   filtered by audience
//! - **Query** — student question to a department inbox, answered once
//!
//! Every group-scoped operation goes through the groups service for its
//! membership verdict.

pub mod api;
pub mod model;
pub mod service;

use std::sync::Arc;

use axum::Router;

use campus_core::Module;
use campus_groups::service::GroupsService;
use campus_store::DocStore;

use crate::service::CommsService;

/// Comms module implementing the Module trait.
pub struct CommsModule {
    service: Arc<CommsService>,
}

impl CommsModule {
    /// Create a new CommsModule.
    pub fn new(
        store: Arc<dyn DocStore>,
        groups: Arc<GroupsService>,
    ) -> Result<Self, campus_core::ServiceError> {
        let service =
            CommsService::new(store, groups).map_err(campus_core::ServiceError::from)?;
        Ok(Self { service })
    }

    /// Get a reference to the underlying CommsService.
    pub fn service(&self) -> &Arc<CommsService> {
        &self.service
    }
}

impl Module for CommsModule {
    fn name(&self) -> &str {
        "comms"
    }

    fn routes(&self) -> Router {
        api::build_router(self.service.clone())
    }
}
