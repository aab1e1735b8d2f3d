use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Extension, Json, Router, middleware};

use campus_auth::gate::{self, GateRole};
use campus_auth::model::Identity;
use campus_core::{PageParams, ServiceError};

use crate::api::AppState;
use crate::model::{GradeSubmission, SubmitWork};

const STUDENTS: &[GateRole] = &[GateRole::Student];
const FACULTY: &[GateRole] = &[GateRole::Faculty];

pub fn routes() -> Router<AppState> {
    let student_ops = Router::new()
        .route("/assignments/{id}/submissions", post(submit_work))
        .route("/assignments/{id}/submissions/mine", get(my_submission))
        .route_layer(middleware::from_fn(|req, next| {
            gate::require(STUDENTS, req, next)
        }));

    let faculty_ops = Router::new()
        .route("/assignments/{id}/submissions", get(list_submissions))
        .route("/submissions/{id}/grade", post(grade_submission))
        .route_layer(middleware::from_fn(|req, next| {
            gate::require(FACULTY, req, next)
        }));

    student_ops.merge(faculty_ops)
}

async fn submit_work(
    State(svc): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
    Json(input): Json<SubmitWork>,
) -> Result<(StatusCode, Json<serde_json::Value>), ServiceError> {
    let submission = svc
        .submit_work(&identity, &id, input)
        .map_err(ServiceError::from)?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({"success": true, "submission": submission})),
    ))
}

async fn list_submissions(
    State(svc): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
    Query(page): Query<PageParams>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let result = svc
        .list_submissions(&identity, &id, &page)
        .map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({
        "success": true,
        "submissions": result.items,
        "total": result.total,
    })))
}

async fn my_submission(
    State(svc): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let submission = svc
        .my_submission(&identity, &id)
        .map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({"success": true, "submission": submission})))
}

async fn grade_submission(
    State(svc): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
    Json(input): Json<GradeSubmission>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let submission = svc
        .grade_submission(&identity, &id, input)
        .map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({"success": true, "submission": submission})))
}
