//! `POST /webhook-handler.php`
//!
//! Body `{projects, settings, timestamp}`, all three required. Both
//! documents are written to the working copy as received and pushed.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{Local, SecondsFormat};
use serde_json::{Value, json};
use tracing::{error, info, instrument, warn};

use folio_core::{
    application::{ApplicationError, PublishRequest},
    error::FolioError,
};

use crate::state::AppState;

pub const SUCCESS_MESSAGE: &str = "Changes committed and pushed successfully";
pub const REQUIRED_FIELDS: [&str; 3] = ["projects", "settings", "timestamp"];
pub const FILES_UPDATED: [&str; 2] = ["projects.json", "settings.json"];

#[instrument(skip_all, fields(bytes = body.len()))]
pub async fn webhook(State(state): State<AppState>, body: Bytes) -> Response {
    let data = match serde_json::from_slice::<Value>(&body) {
        Ok(value) if !is_empty_value(&value) => value,
        _ => return bad_request("Invalid JSON data".into()),
    };

    if let Some(field) = missing_field(&data) {
        return bad_request(format!("Missing required field: {field}"));
    }

    match publish(&state, data).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": SUCCESS_MESSAGE,
                "timestamp": now(),
                "files_updated": FILES_UPDATED,
            })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Webhook publish failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": format!("Server error: {e}"), "timestamp": now() })),
            )
                .into_response()
        }
    }
}

async fn publish(state: &AppState, mut data: Value) -> Result<(), FolioError> {
    let request = PublishRequest::full(data["projects"].take(), data["settings"].take());

    let service = state.webhook().ok_or(ApplicationError::AdapterNotConfigured {
        name: "webhook publisher",
    })?;

    let receipt = service
        .publish(&request)
        .await?;
    info!(files = ?receipt.file_names(), "Changes committed and pushed");
    Ok(())
}

/// The first required field that is absent or null.
fn missing_field(data: &Value) -> Option<&'static str> {
    REQUIRED_FIELDS
        .into_iter()
        .find(|field| data.get(field).is_none_or(Value::is_null))
}

/// Values a loosely typed decoder would treat as "no data".
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn now() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, false)
}

fn bad_request(message: String) -> Response {
    warn!(error = %message, "Rejected webhook body");
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}
