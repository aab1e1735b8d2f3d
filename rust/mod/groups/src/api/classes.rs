use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router, middleware};
use serde::Deserialize;

use campus_auth::gate::{self, GateRole};
use campus_core::{PageParams, ServiceError};

use crate::api::AppState;
use crate::model::{AddStudents, CreateClassGroup, MemberRef};

const STAFF: &[GateRole] = &[GateRole::Admin, GateRole::Hod];

pub fn routes() -> Router<AppState> {
    let staff_ops = Router::new()
        .route("/groups/classes", post(create_class))
        .route("/groups/classes/{id}/tutor", post(set_tutor))
        .route("/groups/classes/{id}/coordinator", post(set_coordinator))
        .route("/groups/classes/{id}/students", post(add_students))
        .route_layer(middleware::from_fn(|req, next| {
            gate::require(STAFF, req, next)
        }));

    Router::new()
        .route("/groups/classes", get(list_classes))
        .route("/groups/classes/{id}", get(get_class))
        .merge(staff_ops)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClassFilter {
    #[serde(default)]
    department_id: Option<String>,
}

async fn create_class(
    State(svc): State<AppState>,
    Json(input): Json<CreateClassGroup>,
) -> Result<(StatusCode, Json<serde_json::Value>), ServiceError> {
    let class_group = svc.create_class_group(input).map_err(ServiceError::from)?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({"success": true, "classGroup": class_group})),
    ))
}

async fn list_classes(
    State(svc): State<AppState>,
    Query(filter): Query<ClassFilter>,
    Query(page): Query<PageParams>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let result = svc
        .list_class_groups(filter.department_id.as_deref(), &page)
        .map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({
        "success": true,
        "classGroups": result.items,
        "total": result.total,
    })))
}

async fn get_class(
    State(svc): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let class_group = svc.get_class_group(&id).map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({"success": true, "classGroup": class_group})))
}

async fn set_tutor(
    State(svc): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<MemberRef>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let class_group = svc
        .set_class_tutor(&id, &input.identity_id)
        .map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({"success": true, "classGroup": class_group})))
}

async fn set_coordinator(
    State(svc): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<MemberRef>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let class_group = svc
        .set_class_coordinator(&id, &input.identity_id)
        .map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({"success": true, "classGroup": class_group})))
}

async fn add_students(
    State(svc): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<AddStudents>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let class_group = svc
        .add_class_students(&id, input)
        .map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({"success": true, "classGroup": class_group})))
}
