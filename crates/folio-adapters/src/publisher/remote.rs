//! Publisher that forwards documents to a deployed update endpoint, the same
//! way the browser admin panel did.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, instrument};

use folio_core::{
    application::{
        ApplicationError, PublishReceipt, PublishRequest, PublishedFile, ports::Publisher,
    },
    error::{FolioError, FolioResult},
};

/// Default path of the update function on the deployed site.
pub const UPDATE_SITE_PATH: &str = "/.netlify/functions/update-site";

#[derive(Debug, Deserialize)]
struct EndpointReply {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

pub struct RemotePublisher {
    client: Client,
    endpoint: String,
}

impl RemotePublisher {
    pub fn new(endpoint: impl Into<String>) -> FolioResult<Self> {
        let endpoint = endpoint.into();
        if endpoint.trim().is_empty() {
            return Err(ApplicationError::AdapterNotConfigured {
                name: "remote endpoint (remote.endpoint)",
            }
            .into());
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| FolioError::Configuration {
                message: format!("Could not build HTTP client: {e}"),
            })?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Publisher for RemotePublisher {
    fn name(&self) -> &'static str {
        "remote"
    }

    #[instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn publish(&self, request: &PublishRequest) -> FolioResult<PublishReceipt> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ApplicationError::PublishFailed {
                reason: format!("Could not reach {}: {e}", self.endpoint),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApplicationError::RemoteStatus {
                status: status.as_u16(),
            }
            .into());
        }

        let reply: EndpointReply = resp.json().await.map_err(|e| ApplicationError::PublishFailed {
            reason: format!("Unreadable reply from {}: {e}", self.endpoint),
        })?;
        if !reply.success {
            return Err(ApplicationError::RemoteRejected {
                message: reply.error.unwrap_or_else(|| "Okänt fel".into()),
            }
            .into());
        }

        info!("Endpoint accepted the update");
        let mut receipt = PublishReceipt::new(self.name());
        if request.projects.is_some() {
            receipt = receipt.with_file(PublishedFile {
                path: "projects.json".into(),
                created: false,
                commit: None,
            });
        }
        if request.settings.is_some() {
            receipt = receipt.with_file(PublishedFile {
                path: "settings.json".into(),
                created: false,
                commit: None,
            });
        }
        Ok(receipt)
    }
}
