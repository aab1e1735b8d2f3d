use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Extension, Json, Router, middleware};

use campus_auth::gate::{self, GateRole};
use campus_auth::model::Identity;
use campus_core::{PageParams, ServiceError};

use crate::api::AppState;
use crate::model::PostCircular;

const PUBLISHERS: &[GateRole] = &[GateRole::Principal, GateRole::Admin];

pub fn routes() -> Router<AppState> {
    let publish_ops = Router::new()
        .route("/circulars", post(publish_circular))
        .route_layer(middleware::from_fn(|req, next| {
            gate::require(PUBLISHERS, req, next)
        }));

    // Reads are open to every authenticated role; the service narrows
    // the list to the caller's audience.
    Router::new()
        .route("/circulars", get(list_circulars))
        .merge(publish_ops)
}

async fn publish_circular(
    State(svc): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(input): Json<PostCircular>,
) -> Result<(StatusCode, Json<serde_json::Value>), ServiceError> {
    let circular = svc
        .publish_circular(&identity, input)
        .map_err(ServiceError::from)?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({"success": true, "circular": circular})),
    ))
}

async fn list_circulars(
    State(svc): State<AppState>,
    Extension(identity): Extension<Identity>,
    Query(page): Query<PageParams>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let result = svc
        .list_circulars(&identity, &page)
        .map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({
        "success": true,
        "circulars": result.items,
        "total": result.total,
    })))
}
