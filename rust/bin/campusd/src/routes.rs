//! Route registration — module routes under /api/v1 plus system
//! endpoints.

use std::sync::Arc;

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Router, middleware};

use campus_auth::service::AuthService;
use campus_core::Module;

use crate::auth_middleware;

/// Build the complete router. Each module's routes are merged and
/// nested under `/api/v1`; the bearer middleware wraps everything and
/// lets the public paths through.
pub fn build_router(auth: Arc<AuthService>, modules: &[&dyn Module]) -> Router {
    let mut api = Router::new();
    for module in modules {
        api = api.merge(module.routes());
    }

    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .nest("/api/v1", api)
        .layer(middleware::from_fn_with_state(
            auth,
            auth_middleware::auth_middleware,
        ))
}

async fn health() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "status": "ok",
    }))
}

async fn version() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": "campusd",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
