use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router, middleware};

use campus_auth::gate::{self, GateRole};
use campus_core::{PageParams, ServiceError};

use crate::api::AppState;
use crate::model::{CreateDepartment, MemberRef};

const ADMIN: &[GateRole] = &[GateRole::Admin];

pub fn routes() -> Router<AppState> {
    let admin_ops = Router::new()
        .route("/groups/departments", post(create_department))
        .route("/groups/departments/{id}/hod", post(set_hod))
        .route("/groups/departments/{id}/members", post(add_member))
        .route_layer(middleware::from_fn(|req, next| {
            gate::require(ADMIN, req, next)
        }));

    Router::new()
        .route("/groups/departments", get(list_departments))
        .route("/groups/departments/{id}", get(get_department))
        .merge(admin_ops)
}

async fn create_department(
    State(svc): State<AppState>,
    Json(input): Json<CreateDepartment>,
) -> Result<(StatusCode, Json<serde_json::Value>), ServiceError> {
    let department = svc.create_department(input).map_err(ServiceError::from)?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({"success": true, "department": department})),
    ))
}

async fn list_departments(
    State(svc): State<AppState>,
    Query(page): Query<PageParams>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let result = svc.list_departments(&page).map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({
        "success": true,
        "departments": result.items,
        "total": result.total,
    })))
}

async fn get_department(
    State(svc): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let department = svc.get_department(&id).map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({"success": true, "department": department})))
}

async fn set_hod(
    State(svc): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<MemberRef>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let department = svc
        .set_department_hod(&id, &input.identity_id)
        .map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({"success": true, "department": department})))
}

async fn add_member(
    State(svc): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<MemberRef>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let department = svc
        .add_department_member(&id, &input.identity_id)
        .map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({"success": true, "department": department})))
}
