use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Extension, Json, Router, middleware};
use serde::Deserialize;

use campus_auth::gate::{self, GateRole};
use campus_auth::model::Identity;
use campus_core::{PageParams, ServiceError};

use crate::api::AppState;
use crate::model::AssignCourse;

// Coordinator is a per-ClassGroup relationship, so the gate defers
// faculty callers and the service checks coordinator-ship itself.
const ASSIGNERS: &[GateRole] = &[GateRole::Coordinator, GateRole::Admin];

pub fn routes() -> Router<AppState> {
    let assign = Router::new()
        .route("/groups/assign-course", post(assign_course))
        .route_layer(middleware::from_fn(|req, next| {
            gate::require(ASSIGNERS, req, next)
        }));

    Router::new()
        .route("/groups/courses", get(list_courses))
        .route("/groups/courses/{id}", get(get_course))
        .merge(assign)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CourseFilter {
    #[serde(default)]
    class_group_id: Option<String>,
}

async fn assign_course(
    State(svc): State<AppState>,
    Extension(caller): Extension<Identity>,
    Json(input): Json<AssignCourse>,
) -> Result<(StatusCode, Json<serde_json::Value>), ServiceError> {
    let course_group = svc
        .assign_course(&caller, input)
        .map_err(ServiceError::from)?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({"success": true, "courseGroup": course_group})),
    ))
}

async fn list_courses(
    State(svc): State<AppState>,
    Query(filter): Query<CourseFilter>,
    Query(page): Query<PageParams>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let result = svc
        .list_course_groups(filter.class_group_id.as_deref(), &page)
        .map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({
        "success": true,
        "courseGroups": result.items,
        "total": result.total,
    })))
}

async fn get_course(
    State(svc): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let course_group = svc.get_course_group(&id).map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({"success": true, "courseGroup": course_group})))
}
