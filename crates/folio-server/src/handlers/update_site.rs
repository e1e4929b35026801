//! `POST /.netlify/functions/update-site`
//!
//! Body `{projects?, settings?, message?}`. A document that is absent or
//! falsy is left untouched in the repository. Every failure, including a
//! body that is not JSON, answers `500 {success: false, error}`.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{error, info, instrument};

use folio_core::application::{ApplicationError, PublishRequest};

use crate::state::AppState;

pub const SUCCESS_MESSAGE: &str = "Ändringar sparade och pushade till GitHub!";

#[instrument(skip_all, fields(bytes = body.len()))]
pub async fn update_site(State(state): State<AppState>, body: Bytes) -> Response {
    let request: PublishRequest = match serde_json::from_slice::<PublishRequest>(&body) {
        Ok(request) => request.without_falsy_documents(),
        Err(e) => return failure(e.to_string()),
    };

    let Some(service) = state.update_site() else {
        return failure(
            ApplicationError::AdapterNotConfigured {
                name: "update-site publisher",
            }
            .to_string(),
        );
    };

    match service.publish(&request).await {
        Ok(receipt) => {
            info!(files = ?receipt.file_names(), "Site updated");
            (
                StatusCode::OK,
                Json(json!({ "success": true, "message": SUCCESS_MESSAGE })),
            )
                .into_response()
        }
        Err(e) => failure(e.to_string()),
    }
}

fn failure(message: String) -> Response {
    error!(error = %message, "Error updating site");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "success": false, "error": message })),
    )
        .into_response()
}
