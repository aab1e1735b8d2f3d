mod auth;
mod identities;

use std::sync::Arc;

use axum::Router;

use crate::service::AuthService;

/// Shared application state.
pub type AppState = Arc<AuthService>;

/// Build the auth API router. Paths carry the `/auth` prefix; the
/// binary nests everything under `/api/v1`.
pub fn build_router(svc: Arc<AuthService>) -> Router {
    Router::new()
        .merge(auth::routes())
        .merge(identities::routes())
        .with_state(svc)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use campus_store::SqliteStore;
    use tower::ServiceExt;

    use super::*;
    use crate::model::{Identity, Role};
    use crate::service::AuthConfig;

    fn test_router() -> Router {
        let store = Arc::new(SqliteStore::open_in_memory().unwrap());
        let svc = AuthService::new(store, AuthConfig::default()).unwrap();
        build_router(svc)
    }

    fn identity(role: Role) -> Identity {
        Identity {
            id: "caller".into(),
            name: "Caller".into(),
            email: "caller@campus.edu".into(),
            role,
            department: None,
            class_group: None,
            batch: None,
            year: None,
            created_at: "2026-01-01T00:00:00.000000Z".into(),
            updated_at: "2026-01-01T00:00:00.000000Z".into(),
        }
    }

    #[tokio::test]
    async fn test_identities_listing_is_admin_only() {
        let router = test_router();

        let req = Request::builder()
            .method("GET")
            .uri("/auth/identities")
            .extension(identity(Role::Faculty))
            .body(Body::empty())
            .unwrap();
        let resp = router.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = Request::builder()
            .method("GET")
            .uri("/auth/identities")
            .extension(identity(Role::Admin))
            .body(Body::empty())
            .unwrap();
        let resp = router.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let router = test_router();

        let body = serde_json::json!({
            "name": "Asha",
            "email": "asha@campus.edu",
            "password": "pass1234",
            "role": "student",
        });
        let req = Request::builder()
            .method("POST")
            .uri("/auth/register")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let resp = router.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body = serde_json::json!({"email": "asha@campus.edu", "password": "pass1234"});
        let req = Request::builder()
            .method("POST")
            .uri("/auth/login")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let resp = router.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(resp.into_body(), 64 * 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["success"], true);
        assert!(json["token"].as_str().is_some_and(|t| !t.is_empty()));
        assert_eq!(json["identity"]["role"], "student");
    }
}
