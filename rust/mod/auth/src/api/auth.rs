use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};

use campus_core::ServiceError;

use crate::api::AppState;
use crate::model::{Claims, Identity, LoginRequest, RegisterIdentity};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(me))
}

async fn register(
    State(svc): State<AppState>,
    Json(input): Json<RegisterIdentity>,
) -> Result<(StatusCode, Json<serde_json::Value>), ServiceError> {
    let identity = svc.register_identity(input).map_err(ServiceError::from)?;
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({"success": true, "identity": identity})),
    ))
}

async fn login(
    State(svc): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let (token, identity) = svc
        .login(&input.email, &input.password)
        .map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({
        "success": true,
        "token": token,
        "identity": identity,
    })))
}

async fn logout(
    State(svc): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    svc.revoke_session(&claims.sid).map_err(ServiceError::from)?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Logged out",
    })))
}

async fn me(
    Extension(identity): Extension<Identity>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    Ok(Json(serde_json::json!({
        "success": true,
        "identity": identity,
    })))
}
