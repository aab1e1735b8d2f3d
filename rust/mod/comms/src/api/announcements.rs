use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Extension, Json, Router, middleware};
use serde::Deserialize;

use campus_auth::gate::{self, GateRole};
use campus_auth::model::Identity;
use campus_core::{PageParams, ServiceError};

use crate::api::AppState;
use crate::model::PostAnnouncement;

const POSTERS: &[GateRole] = &[GateRole::Faculty, GateRole::Hod, GateRole::Principal];
const READERS: &[GateRole] = &[
    GateRole::Student,
    GateRole::Faculty,
    GateRole::Hod,
    GateRole::Principal,
];

pub fn routes() -> Router<AppState> {
    let post_ops = Router::new()
        .route("/announcements", post(post_announcement))
        .route_layer(middleware::from_fn(|req, next| {
            gate::require(POSTERS, req, next)
        }));

    Router::new()
        .route("/announcements", get(list_announcements))
        .route_layer(middleware::from_fn(|req, next| {
            gate::require(READERS, req, next)
        }))
        .merge(post_ops)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnnouncementFilter {
    #[serde(default)]
    group_type: Option<String>,
    #[serde(default)]
    group_id: Option<String>,
}

async fn post_announcement(
    State(svc): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(input): Json<PostAnnouncement>,
) -> Result<(StatusCode, Json<serde_json::Value>), ServiceError> {
    let announcement = svc
        .post_announcement(&identity, input)
        .map_err(ServiceError::from)?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({"success": true, "announcement": announcement})),
    ))
}

async fn list_announcements(
    State(svc): State<AppState>,
    Extension(identity): Extension<Identity>,
    Query(filter): Query<AnnouncementFilter>,
    Query(page): Query<PageParams>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let result = svc
        .list_announcements(
            &identity,
            filter.group_type.as_deref(),
            filter.group_id.as_deref(),
            &page,
        )
        .map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({
        "success": true,
        "announcements": result.items,
        "total": result.total,
    })))
}
