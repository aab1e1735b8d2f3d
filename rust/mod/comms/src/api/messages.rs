use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::Deserialize;

use campus_auth::model::Identity;
use campus_core::{PageParams, ServiceError};

use crate::api::AppState;
use crate::model::SendMessage;

// No role gate here: the admin exclusion has its own wording and must
// fire inside the authorization sequence, ahead of field validation.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/messages/send", post(send_message))
        .route("/messages", get(list_messages))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageFilter {
    #[serde(default)]
    group_type: Option<String>,
    #[serde(default)]
    group_id: Option<String>,
}

async fn send_message(
    State(svc): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(input): Json<SendMessage>,
) -> Result<(StatusCode, Json<serde_json::Value>), ServiceError> {
    let message = svc
        .send_message(&identity, input)
        .map_err(ServiceError::from)?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({"success": true, "message": message})),
    ))
}

async fn list_messages(
    State(svc): State<AppState>,
    Extension(identity): Extension<Identity>,
    Query(filter): Query<MessageFilter>,
    Query(page): Query<PageParams>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let result = svc
        .list_messages(
            &identity,
            filter.group_type.as_deref(),
            filter.group_id.as_deref(),
            &page,
        )
        .map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({
        "success": true,
        "messages": result.items,
        "total": result.total,
    })))
}
