mod announcements;
mod circulars;
mod messages;
mod queries;

use std::sync::Arc;

use axum::Router;

use crate::service::CommsService;

/// Shared application state.
pub type AppState = Arc<CommsService>;

/// Build the comms API router. The binary nests everything under
/// `/api/v1`.
pub fn build_router(svc: Arc<CommsService>) -> Router {
    Router::new()
        .merge(messages::routes())
        .merge(announcements::routes())
        .merge(circulars::routes())
        .merge(queries::routes())
        .with_state(svc)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use campus_auth::model::Identity;
    use tower::ServiceExt;

    use super::*;
    use crate::service::testutil::TestCampus;

    async fn api_call(
        router: &Router,
        method: &str,
        uri: &str,
        caller: &Identity,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .extension(caller.clone());
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let resp = router.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), 64 * 1024).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_department_chat_round_trip() {
        let campus = TestCampus::new();
        let router = build_router(campus.comms.clone());
        let body = serde_json::json!({
            "groupType": "Department",
            "groupId": campus.dept_id,
            "content": "hi",
        });

        let (status, json) =
            api_call(&router, "POST", "/messages/send", &campus.faculty, Some(body.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"]["sender"], campus.faculty.id);

        let (status, json) =
            api_call(&router, "POST", "/messages/send", &campus.outsider, Some(body)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        let reason = json["message"].as_str().unwrap().to_lowercase();
        assert!(reason.contains("do not have permission"));

        let uri = format!(
            "/messages?groupType=Department&groupId={}",
            campus.dept_id
        );
        let (status, json) = api_call(&router, "GET", &uri, &campus.student, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total"], 1);
        assert_eq!(json["messages"][0]["content"], "hi");
    }

    #[tokio::test]
    async fn test_missing_group_id_is_bad_request() {
        let campus = TestCampus::new();
        let router = build_router(campus.comms.clone());

        let (status, json) =
            api_call(&router, "GET", "/messages?groupType=Department", &campus.student, None)
                .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let reason = json["message"].as_str().unwrap().to_lowercase();
        assert!(reason.contains("provide grouptype and groupid"));
        assert_eq!(json["code"], "VALIDATION_FAILED");
    }

    #[tokio::test]
    async fn test_announcement_role_gates() {
        let campus = TestCampus::new();
        let router = build_router(campus.comms.clone());
        let body = serde_json::json!({
            "groupType": "Department",
            "groupId": campus.dept_id,
            "title": "Exam schedule",
            "content": "details inside",
        });

        let (status, json) =
            api_call(&router, "POST", "/announcements", &campus.student, Some(body.clone())).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(
            json["message"],
            "Role (student) is not allowed to access this resource"
        );

        let (status, _) =
            api_call(&router, "POST", "/announcements", &campus.faculty, Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);

        // Admins are shut out of group announcements entirely.
        let uri = format!(
            "/announcements?groupType=Department&groupId={}",
            campus.dept_id
        );
        let (status, _) = api_call(&router, "GET", &uri, &campus.admin, None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_query_workflow_over_http() {
        let campus = TestCampus::new();
        let router = build_router(campus.comms.clone());

        let body = serde_json::json!({
            "departmentId": campus.dept_id,
            "subject": "Exam dates",
            "content": "please clarify",
        });
        let (status, json) =
            api_call(&router, "POST", "/queries", &campus.student, Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        let query_id = json["query"]["id"].as_str().unwrap().to_string();

        let uri = format!("/queries/{query_id}/respond");
        let body = serde_json::json!({"content": "Next Monday"});
        let (status, json) =
            api_call(&router, "POST", &uri, &campus.hod, Some(body.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["query"]["status"], "answered");

        let (status, json) = api_call(&router, "POST", &uri, &campus.hod, Some(body)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["code"], "ALREADY_EXISTS");
    }
}
