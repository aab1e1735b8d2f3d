mod classes;
mod courses;
mod departments;

use std::sync::Arc;

use axum::Router;

use crate::service::GroupsService;

/// Shared application state.
pub type AppState = Arc<GroupsService>;

/// Build the groups API router. Paths carry the `/groups` prefix; the
/// binary nests everything under `/api/v1`.
pub fn build_router(svc: Arc<GroupsService>) -> Router {
    Router::new()
        .merge(departments::routes())
        .merge(classes::routes())
        .merge(courses::routes())
        .with_state(svc)
}
