use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Extension, Json, Router, middleware};
use serde::Deserialize;

use campus_auth::gate::{self, GateRole};
use campus_auth::model::Identity;
use campus_core::{PageParams, ServiceError};

use crate::api::AppState;
use crate::model::{PostQuery, RespondQuery};

const STUDENTS: &[GateRole] = &[GateRole::Student];
const STAFF: &[GateRole] = &[GateRole::Faculty, GateRole::Hod];

pub fn routes() -> Router<AppState> {
    let student_ops = Router::new()
        .route("/queries", post(raise_query))
        .route("/queries/mine", get(list_my_queries))
        .route_layer(middleware::from_fn(|req, next| {
            gate::require(STUDENTS, req, next)
        }));

    let staff_ops = Router::new()
        .route("/queries", get(list_queries))
        .route("/queries/{id}/respond", post(respond_to_query))
        .route_layer(middleware::from_fn(|req, next| {
            gate::require(STAFF, req, next)
        }));

    student_ops.merge(staff_ops)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InboxFilter {
    #[serde(default)]
    department_id: Option<String>,
}

async fn raise_query(
    State(svc): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(input): Json<PostQuery>,
) -> Result<(StatusCode, Json<serde_json::Value>), ServiceError> {
    let query = svc
        .raise_query(&identity, input)
        .map_err(ServiceError::from)?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({"success": true, "query": query})),
    ))
}

async fn list_queries(
    State(svc): State<AppState>,
    Extension(identity): Extension<Identity>,
    Query(filter): Query<InboxFilter>,
    Query(page): Query<PageParams>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let result = svc
        .list_department_queries(&identity, filter.department_id.as_deref(), &page)
        .map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({
        "success": true,
        "queries": result.items,
        "total": result.total,
    })))
}

async fn list_my_queries(
    State(svc): State<AppState>,
    Extension(identity): Extension<Identity>,
    Query(page): Query<PageParams>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let result = svc
        .list_my_queries(&identity, &page)
        .map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({
        "success": true,
        "queries": result.items,
        "total": result.total,
    })))
}

async fn respond_to_query(
    State(svc): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
    Json(input): Json<RespondQuery>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let query = svc
        .respond_to_query(&identity, &id, input)
        .map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({"success": true, "query": query})))
}
