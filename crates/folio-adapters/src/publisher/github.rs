//! Publisher that commits documents through the GitHub contents API.
//!
//! Each document is one GET (to learn the blob SHA) followed by one PUT.
//! Documents are committed independently: if settings fail after projects
//! went through, the projects commit stays.

use std::path::Path;
use std::time::Duration;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use async_trait::async_trait;
use folio_core::{
    application::{
        ApplicationError, PublishReceipt, PublishRequest, PublishedFile,
        dto::{SETTINGS_COMMIT_MESSAGE, SETTINGS_CREATE_MESSAGE},
        ports::Publisher,
    },
    error::{FolioError, FolioResult},
};

use crate::store::to_pretty_json;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Where and how to commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubTarget {
    pub api_base: String,
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub projects_path: String,
    pub settings_path: String,
    pub token: String,
}

impl Default for GitHubTarget {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            owner: "oujii".into(),
            repo: "magda-portfolio".into(),
            branch: "main".into(),
            projects_path: "new/data/projects.json".into(),
            settings_path: "new/data/settings.json".into(),
            token: String::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ContentsEntry {
    sha: String,
}

#[derive(Debug, Serialize)]
struct PutContents<'a> {
    message: &'a str,
    content: String,
    branch: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct PutResponse {
    commit: Option<CommitRef>,
}

#[derive(Debug, Deserialize)]
struct CommitRef {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    message: String,
}

pub struct GitHubPublisher {
    client: Client,
    target: GitHubTarget,
}

impl GitHubPublisher {
    pub fn new(target: GitHubTarget) -> FolioResult<Self> {
        if target.token.trim().is_empty() {
            return Err(ApplicationError::AdapterNotConfigured {
                name: "github token (set GITHUB_TOKEN or github.token)",
            }
            .into());
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        let auth = HeaderValue::from_str(&format!("token {}", target.token.trim())).map_err(|_| {
            FolioError::Configuration {
                message: "GitHub token contains characters not allowed in a header".into(),
            }
        })?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("folio/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| FolioError::Configuration {
                message: format!("Could not build HTTP client: {e}"),
            })?;

        Ok(Self { client, target })
    }

    pub fn target(&self) -> &GitHubTarget {
        &self.target
    }

    fn contents_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.target.api_base.trim_end_matches('/'),
            self.target.owner,
            self.target.repo,
            path
        )
    }

    /// SHA of the file on the branch, `None` when it does not exist.
    #[instrument(skip(self))]
    async fn current_sha(&self, path: &str) -> FolioResult<Option<String>> {
        let resp = self
            .client
            .get(self.contents_url(path))
            .query(&[("ref", self.target.branch.as_str())])
            .send()
            .await
            .map_err(transport_error)?;

        match resp.status() {
            StatusCode::NOT_FOUND => {
                debug!("File does not exist yet");
                Ok(None)
            }
            status if status.is_success() => {
                let entry: ContentsEntry = resp.json().await.map_err(transport_error)?;
                Ok(Some(entry.sha))
            }
            status => Err(api_error(status, resp.text().await.unwrap_or_default())),
        }
    }

    #[instrument(skip(self, json), fields(has_sha = sha.is_some()))]
    async fn put(
        &self,
        path: &str,
        json: &str,
        message: &str,
        sha: Option<&str>,
    ) -> FolioResult<Option<String>> {
        let body = PutContents {
            message,
            content: STANDARD.encode(json.as_bytes()),
            branch: &self.target.branch,
            sha,
        };

        let resp = self
            .client
            .put(self.contents_url(path))
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(api_error(status, resp.text().await.unwrap_or_default()));
        }

        let commit = resp
            .json::<PutResponse>()
            .await
            .ok()
            .and_then(|r| r.commit)
            .map(|c| c.sha);
        Ok(commit)
    }
}

fn transport_error(e: reqwest::Error) -> FolioError {
    ApplicationError::PublishFailed {
        reason: format!("GitHub request failed: {e}"),
    }
    .into()
}

/// Prefer the API's own `message` field; fall back to the status text.
fn api_error(status: StatusCode, body: String) -> FolioError {
    let detail = serde_json::from_str::<ApiMessage>(&body)
        .map(|m| m.message)
        .unwrap_or_else(|_| status.canonical_reason().unwrap_or("Unknown error").to_string());
    ApplicationError::PublishFailed {
        reason: format!("GitHub API error ({}): {}", status.as_u16(), detail),
    }
    .into()
}

#[async_trait]
impl Publisher for GitHubPublisher {
    fn name(&self) -> &'static str {
        "github"
    }

    #[instrument(skip_all, fields(repo = %format!("{}/{}", self.target.owner, self.target.repo)))]
    async fn publish(&self, request: &PublishRequest) -> FolioResult<PublishReceipt> {
        let mut receipt = PublishReceipt::new(self.name());

        if let Some(projects) = &request.projects {
            let path = self.target.projects_path.as_str();
            let json = to_pretty_json(Path::new(path), projects)?;
            let sha = self.current_sha(path).await?;
            let commit = self
                .put(path, &json, request.projects_message(), sha.as_deref())
                .await?;
            info!(path, "Projects committed");
            receipt = receipt.with_file(PublishedFile {
                path: path.to_string(),
                created: sha.is_none(),
                commit,
            });
        }

        if let Some(settings) = &request.settings {
            let path = self.target.settings_path.as_str();
            let json = to_pretty_json(Path::new(path), settings)?;
            let sha = self.current_sha(path).await?;
            let message = if sha.is_some() {
                SETTINGS_COMMIT_MESSAGE
            } else {
                SETTINGS_CREATE_MESSAGE
            };
            let commit = self.put(path, &json, message, sha.as_deref()).await?;
            info!(path, created = sha.is_none(), "Settings committed");
            receipt = receipt.with_file(PublishedFile {
                path: path.to_string(),
                created: sha.is_none(),
                commit,
            });
        }

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_is_a_configuration_error() {
        let err = GitHubPublisher::new(GitHubTarget::default()).err().unwrap();
        assert_eq!(
            err.category(),
            folio_core::error::ErrorCategory::Configuration
        );
    }

    #[test]
    fn api_error_prefers_the_body_message() {
        let err = api_error(
            StatusCode::CONFLICT,
            r#"{"message":"sha does not match"}"#.into(),
        );
        assert_eq!(err.to_string(), "GitHub API error (409): sha does not match");

        let err = api_error(StatusCode::BAD_GATEWAY, "<html>".into());
        assert_eq!(err.to_string(), "GitHub API error (502): Bad Gateway");
    }

    #[test]
    fn contents_url_trims_trailing_slash() {
        let publisher = GitHubPublisher::new(GitHubTarget {
            api_base: "http://localhost:9999/".into(),
            token: "t".into(),
            ..GitHubTarget::default()
        })
        .unwrap();
        assert_eq!(
            publisher.contents_url("new/data/projects.json"),
            "http://localhost:9999/repos/oujii/magda-portfolio/contents/new/data/projects.json"
        );
    }
}
