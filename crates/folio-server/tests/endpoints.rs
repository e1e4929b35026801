//! Router behaviour exercised with `tower::ServiceExt::oneshot`.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use folio_core::application::{
    ApplicationError, PublishReceipt, PublishRequest, PublishService, PublishedFile,
    ports::Publisher,
};
use folio_core::error::FolioResult;
use folio_server::{AppState, create_router};

const UPDATE_SITE: &str = "/.netlify/functions/update-site";
const WEBHOOK: &str = "/webhook-handler.php";

/// Records every request; fails when built with `failing`.
#[derive(Clone, Default)]
struct Recorder {
    seen: Arc<Mutex<Vec<PublishRequest>>>,
    fail_with: Option<String>,
}

impl Recorder {
    fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::default()
        }
    }

    fn seen(&self) -> Vec<PublishRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Publisher for Recorder {
    fn name(&self) -> &'static str {
        "recorder"
    }

    async fn publish(&self, request: &PublishRequest) -> FolioResult<PublishReceipt> {
        self.seen.lock().unwrap().push(request.clone());
        if let Some(reason) = &self.fail_with {
            return Err(ApplicationError::PublishFailed {
                reason: reason.clone(),
            }
            .into());
        }
        Ok(PublishReceipt::new("recorder").with_file(PublishedFile {
            path: "projects.json".into(),
            created: false,
            commit: None,
        }))
    }
}

fn app(update_site: Recorder, webhook: Recorder) -> Router {
    let state = AppState::new(
        Some(PublishService::new(Box::new(update_site))),
        Some(PublishService::new(Box::new(webhook))),
    );
    create_router(state, None)
}

async fn send(app: Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value, Vec<(String, String)>) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let headers = response
        .headers()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or_default().to_string()))
        .collect();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json, headers)
}

fn header_value<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}

// ============================================================================
// update-site
// ============================================================================

#[tokio::test]
async fn update_site_publishes_and_confirms() {
    let recorder = Recorder::default();
    let body = json!({
        "projects": [{"id": "a", "title": "Karta", "category": "maps"}],
        "message": "Ny karta"
    });

    let (status, json, headers) = send(
        app(recorder.clone(), Recorder::default()),
        Method::POST,
        UPDATE_SITE,
        &body.to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Ändringar sparade och pushade till GitHub!");
    assert_eq!(header_value(&headers, "access-control-allow-origin"), Some("*"));

    let seen = recorder.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].projects_message(), "Ny karta");
    assert!(seen[0].settings.is_none());
}

#[tokio::test]
async fn update_site_accepts_loosely_typed_projects() {
    let recorder = Recorder::default();
    let projects = json!([{"id": "a", "title": "Karta", "year": 2023, "price": 450}]);
    let body = json!({"projects": projects, "settings": false, "message": 42});

    let (status, json, _) = send(
        app(recorder.clone(), Recorder::default()),
        Method::POST,
        UPDATE_SITE,
        &body.to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    let seen = recorder.seen();
    assert_eq!(seen[0].projects, Some(projects));
    assert!(seen[0].settings.is_none());
    assert_eq!(seen[0].projects_message(), "42");
}

#[tokio::test]
async fn update_site_unparsable_body_is_500() {
    let recorder = Recorder::default();
    let (status, json, _) = send(
        app(recorder.clone(), Recorder::default()),
        Method::POST,
        UPDATE_SITE,
        "not json",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().is_some());
    assert!(recorder.seen().is_empty());
}

#[tokio::test]
async fn update_site_publisher_error_is_500_with_message() {
    let (status, json, _) = send(
        app(Recorder::failing("Bad credentials"), Recorder::default()),
        Method::POST,
        UPDATE_SITE,
        r#"{"settings": {}}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({"success": false, "error": "Bad credentials"}));
}

#[tokio::test]
async fn options_is_200_with_cors_headers() {
    for uri in [UPDATE_SITE, WEBHOOK] {
        let (status, _, headers) =
            send(app(Recorder::default(), Recorder::default()), Method::OPTIONS, uri, "").await;

        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(header_value(&headers, "access-control-allow-origin"), Some("*"));
        assert_eq!(
            header_value(&headers, "access-control-allow-headers"),
            Some("Content-Type")
        );
        assert_eq!(
            header_value(&headers, "access-control-allow-methods"),
            Some("POST, OPTIONS")
        );
    }
}

#[tokio::test]
async fn other_methods_are_405() {
    for (method, uri) in [(Method::GET, UPDATE_SITE), (Method::PUT, WEBHOOK)] {
        let (status, json, _) =
            send(app(Recorder::default(), Recorder::default()), method, uri, "").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(json, json!({"error": "Method not allowed"}));
    }
}

// ============================================================================
// webhook
// ============================================================================

#[tokio::test]
async fn webhook_publishes_both_documents() {
    let recorder = Recorder::default();
    let body = json!({
        "projects": [{"id": "a", "title": "Bok", "category": "books"}],
        "settings": {"contact": {"email": "hej@magda.se", "phone": "1"}},
        "timestamp": "2025-02-01T10:00:00Z"
    });

    let (status, json, _) = send(
        app(Recorder::default(), recorder.clone()),
        Method::POST,
        WEBHOOK,
        &body.to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Changes committed and pushed successfully");
    assert_eq!(json["files_updated"], json!(["projects.json", "settings.json"]));
    assert!(json["timestamp"].as_str().is_some());

    let seen = recorder.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].projects.as_ref().unwrap().as_array().unwrap().len(), 1);
    assert_eq!(
        seen[0].settings.as_ref().unwrap()["contact"]["email"],
        "hej@magda.se"
    );
    assert_eq!(seen[0].message, None);
}

#[tokio::test]
async fn webhook_forwards_hand_written_documents_unchanged() {
    let recorder = Recorder::default();
    let projects = json!([{"id": 7, "title": "Karta", "year": 2023, "price": 450}]);
    let settings = json!({"contact": {"phone": 701234567}, "theme": "dark"});
    let body = json!({"projects": projects, "settings": settings, "timestamp": 1});

    let (status, _, _) = send(
        app(Recorder::default(), recorder.clone()),
        Method::POST,
        WEBHOOK,
        &body.to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let seen = recorder.seen();
    assert_eq!(seen[0].projects, Some(projects));
    assert_eq!(seen[0].settings, Some(settings));
}

#[tokio::test]
async fn webhook_rejects_invalid_json() {
    for body in ["{oops", "null", "{}"] {
        let (status, json, _) =
            send(app(Recorder::default(), Recorder::default()), Method::POST, WEBHOOK, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(json, json!({"error": "Invalid JSON data"}));
    }
}

#[tokio::test]
async fn webhook_names_the_missing_field() {
    let recorder = Recorder::default();
    let (status, json, _) = send(
        app(Recorder::default(), recorder.clone()),
        Method::POST,
        WEBHOOK,
        r#"{"projects": [], "settings": {}}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"error": "Missing required field: timestamp"}));
    assert!(recorder.seen().is_empty());
}

#[tokio::test]
async fn webhook_failure_is_500_server_error() {
    let body = json!({"projects": [], "settings": {}, "timestamp": "t"});
    let (status, json, _) = send(
        app(Recorder::default(), Recorder::failing("Git command failed: git push origin main")),
        Method::POST,
        WEBHOOK,
        &body.to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json["error"],
        "Server error: Git command failed: git push origin main"
    );
    assert!(json["timestamp"].as_str().is_some());
}

// ============================================================================
// misc
// ============================================================================

#[tokio::test]
async fn health_is_ok() {
    let response = app(Recorder::default(), Recorder::default())
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn rendered_site_is_served_from_site_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Hem</h1>").unwrap();

    let app = create_router(AppState::default(), Some(dir.path()));
    let response = app
        .oneshot(Request::get("/index.html").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"<h1>Hem</h1>");
}

#[tokio::test]
async fn unconfigured_endpoint_reports_configuration_error() {
    let app = create_router(AppState::default(), None);
    let (status, json, _) = send(app, Method::POST, UPDATE_SITE, "{}").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .contains("update-site publisher")
    );
}
