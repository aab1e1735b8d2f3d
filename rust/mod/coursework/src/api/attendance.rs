use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Extension, Json, Router, middleware};
use serde::Deserialize;

use campus_auth::gate::{self, GateRole};
use campus_auth::model::Identity;
use campus_core::{PageParams, ServiceError};

use crate::api::AppState;
use crate::model::RecordAttendance;

const FACULTY: &[GateRole] = &[GateRole::Faculty];
const VIEWERS: &[GateRole] = &[GateRole::Faculty, GateRole::Hod];
const STUDENTS: &[GateRole] = &[GateRole::Student];

pub fn routes() -> Router<AppState> {
    let faculty_ops = Router::new()
        .route("/attendance", post(record_attendance))
        .route_layer(middleware::from_fn(|req, next| {
            gate::require(FACULTY, req, next)
        }));

    let viewer_ops = Router::new()
        .route("/attendance", get(list_attendance))
        .route_layer(middleware::from_fn(|req, next| {
            gate::require(VIEWERS, req, next)
        }));

    let student_ops = Router::new()
        .route("/attendance/mine", get(my_attendance))
        .route_layer(middleware::from_fn(|req, next| {
            gate::require(STUDENTS, req, next)
        }));

    faculty_ops.merge(viewer_ops).merge(student_ops)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AttendanceFilter {
    #[serde(default)]
    course_group_id: Option<String>,
}

async fn record_attendance(
    State(svc): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(input): Json<RecordAttendance>,
) -> Result<(StatusCode, Json<serde_json::Value>), ServiceError> {
    let record = svc
        .record_attendance(&identity, input)
        .map_err(ServiceError::from)?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({"success": true, "attendance": record})),
    ))
}

async fn list_attendance(
    State(svc): State<AppState>,
    Extension(identity): Extension<Identity>,
    Query(filter): Query<AttendanceFilter>,
    Query(page): Query<PageParams>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let result = svc
        .list_attendance(&identity, filter.course_group_id.as_deref(), &page)
        .map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({
        "success": true,
        "attendance": result.items,
        "total": result.total,
    })))
}

async fn my_attendance(
    State(svc): State<AppState>,
    Extension(identity): Extension<Identity>,
    Query(filter): Query<AttendanceFilter>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let summary = svc
        .my_attendance(&identity, filter.course_group_id.as_deref())
        .map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({"success": true, "attendance": summary})))
}
