use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router, middleware};
use serde::Deserialize;

use campus_core::{PageParams, ServiceError};

use crate::api::AppState;
use crate::gate::{self, GateRole};
use crate::model::Role;

const ADMIN: &[GateRole] = &[GateRole::Admin];

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/identities", get(list_identities))
        .route(
            "/auth/identities/{id}",
            get(get_identity).delete(delete_identity),
        )
        .route_layer(middleware::from_fn(|req, next| {
            gate::require(ADMIN, req, next)
        }))
}

#[derive(Debug, Deserialize)]
struct RoleFilter {
    #[serde(default)]
    role: Option<String>,
}

async fn list_identities(
    State(svc): State<AppState>,
    Query(filter): Query<RoleFilter>,
    Query(page): Query<PageParams>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let role = match filter.role {
        Some(raw) => Some(
            raw.parse::<Role>()
                .map_err(|_| ServiceError::Validation(format!("Role ({raw}) is not valid")))?,
        ),
        None => None,
    };
    let result = svc
        .list_identities(role, &page)
        .map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({
        "success": true,
        "identities": result.items,
        "total": result.total,
    })))
}

async fn get_identity(
    State(svc): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let identity = svc.get_identity(&id).map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({"success": true, "identity": identity})))
}

async fn delete_identity(
    State(svc): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServiceError> {
    svc.delete_identity(&id).map_err(ServiceError::from)?;
    Ok(StatusCode::NO_CONTENT)
}
