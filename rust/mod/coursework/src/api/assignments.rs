use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Extension, Json, Router, middleware};
use serde::Deserialize;

use campus_auth::gate::{self, GateRole};
use campus_auth::model::Identity;
use campus_core::{PageParams, ServiceError};

use crate::api::AppState;
use crate::model::CreateAssignment;

const FACULTY: &[GateRole] = &[GateRole::Faculty];
const MEMBERS: &[GateRole] = &[
    GateRole::Student,
    GateRole::Faculty,
    GateRole::Hod,
    GateRole::Principal,
];

pub fn routes() -> Router<AppState> {
    let faculty_ops = Router::new()
        .route("/assignments", post(create_assignment))
        .route_layer(middleware::from_fn(|req, next| {
            gate::require(FACULTY, req, next)
        }));

    let reads = Router::new()
        .route("/assignments", get(list_assignments))
        .route_layer(middleware::from_fn(|req, next| {
            gate::require(MEMBERS, req, next)
        }));

    faculty_ops.merge(reads)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssignmentFilter {
    #[serde(default)]
    course_group_id: Option<String>,
}

async fn create_assignment(
    State(svc): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(input): Json<CreateAssignment>,
) -> Result<(StatusCode, Json<serde_json::Value>), ServiceError> {
    let assignment = svc
        .create_assignment(&identity, input)
        .map_err(ServiceError::from)?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({"success": true, "assignment": assignment})),
    ))
}

async fn list_assignments(
    State(svc): State<AppState>,
    Extension(identity): Extension<Identity>,
    Query(filter): Query<AssignmentFilter>,
    Query(page): Query<PageParams>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let result = svc
        .list_assignments(&identity, filter.course_group_id.as_deref(), &page)
        .map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({
        "success": true,
        "assignments": result.items,
        "total": result.total,
    })))
}
