mod assignments;
mod attendance;
mod submissions;

use std::sync::Arc;

use axum::Router;

use crate::service::CourseworkService;

/// Shared application state.
pub type AppState = Arc<CourseworkService>;

/// Build the coursework API router. The binary nests everything under
/// `/api/v1`.
pub fn build_router(svc: Arc<CourseworkService>) -> Router {
    Router::new()
        .merge(assignments::routes())
        .merge(submissions::routes())
        .merge(attendance::routes())
        .with_state(svc)
}
