//! Data carried across the application boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

use crate::{
    application::ApplicationError,
    domain::{Catalog, Settings, lenient},
    error::FolioResult,
};

/// Commit message for a projects update when the caller gave none.
pub const PROJECTS_COMMIT_MESSAGE: &str = "Uppdatera projekt från admin-panel";
/// Commit message for a settings update.
pub const SETTINGS_COMMIT_MESSAGE: &str = "Uppdatera inställningar från admin-panel";
/// Commit message when the settings document does not exist yet.
pub const SETTINGS_CREATE_MESSAGE: &str = "Skapa inställningsfil från admin-panel";

/// What to publish. Either document may be absent; absent documents are
/// left untouched at the destination.
///
/// Documents travel as plain JSON and reach the destination exactly as
/// given: the update endpoints commit whatever the admin sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublishRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub message: Option<String>,
}

impl PublishRequest {
    pub fn full(projects: Value, settings: Value) -> Self {
        Self {
            projects: Some(projects),
            settings: Some(settings),
            message: None,
        }
    }

    /// Both local documents.
    pub fn from_documents(projects: &Catalog, settings: &Settings) -> FolioResult<Self> {
        Ok(Self::full(
            document_value("projects.json", projects)?,
            document_value("settings.json", settings)?,
        ))
    }

    /// Drop documents a loosely typed caller would treat as absent
    /// (`false`, `0`, `""`).
    pub fn without_falsy_documents(mut self) -> Self {
        self.projects = self.projects.filter(lenient::is_truthy);
        self.settings = self.settings.filter(lenient::is_truthy);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.message = (!message.trim().is_empty()).then_some(message);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_none() && self.settings.is_none()
    }

    /// The commit message for the projects document.
    pub fn projects_message(&self) -> &str {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(PROJECTS_COMMIT_MESSAGE)
    }
}

fn document_value<T: Serialize>(document: &str, value: &T) -> FolioResult<Value> {
    let value = serde_json::to_value(value).map_err(|e| ApplicationError::Serialization {
        document: document.into(),
        reason: e.to_string(),
    })?;
    Ok(value)
}

/// One document that reached the destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedFile {
    pub path: String,
    /// `true` when the destination had no copy before.
    pub created: bool,
    /// Commit id reported by the destination, when it reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
}

/// Outcome of a successful publish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishReceipt {
    pub publisher: String,
    pub files: Vec<PublishedFile>,
    pub published_at: DateTime<Utc>,
}

impl PublishReceipt {
    pub fn new(publisher: impl Into<String>) -> Self {
        Self {
            publisher: publisher.into(),
            files: Vec::new(),
            published_at: Utc::now(),
        }
    }

    pub fn with_file(mut self, file: PublishedFile) -> Self {
        self.files.push(file);
        self
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.path.as_str()).collect()
    }
}

/// Full snapshot of both documents, as written by `folio export`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Backup {
    pub projects: Catalog,
    pub settings: Settings,
    pub exported: DateTime<Utc>,
}

impl Backup {
    /// Backup file name for a given export time, e.g.
    /// `magda-portfolio-backup-2025-01-31.json`.
    pub fn file_name(&self) -> String {
        format!(
            "magda-portfolio-backup-{}.json",
            self.exported.format("%Y-%m-%d")
        )
    }
}

/// Summary of a site build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub root: PathBuf,
    pub pages: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn blank_message_falls_back_to_default() {
        let req = PublishRequest::default().with_message("   ");
        assert_eq!(req.message, None);
        assert_eq!(req.projects_message(), PROJECTS_COMMIT_MESSAGE);

        let req = PublishRequest::default().with_message("Nya kartor");
        assert_eq!(req.projects_message(), "Nya kartor");
    }

    #[test]
    fn request_parses_partial_bodies() {
        let req: PublishRequest = serde_json::from_str(r#"{"settings":{}}"#).unwrap();
        assert!(req.projects.is_none());
        assert!(req.settings.is_some());
        assert!(!req.is_empty());

        let req: PublishRequest = serde_json::from_str("{}").unwrap();
        assert!(req.is_empty());
    }

    #[test]
    fn any_json_is_carried_as_is() {
        let body = r#"{"projects":[{"id":1,"year":2023}],"settings":"x","message":42}"#;
        let req: PublishRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.projects.as_ref().unwrap()[0]["year"], 2023);
        assert_eq!(req.settings, Some(Value::from("x")));
        assert_eq!(req.projects_message(), "42");
    }

    #[test]
    fn falsy_documents_are_dropped() {
        let req: PublishRequest =
            serde_json::from_str(r#"{"projects":false,"settings":{},"message":null}"#).unwrap();
        let req = req.without_falsy_documents();
        assert!(req.projects.is_none());
        assert!(req.settings.is_some());
    }

    #[test]
    fn local_documents_become_json() {
        let req = PublishRequest::from_documents(&Catalog::default(), &Settings::empty()).unwrap();
        assert_eq!(req.projects, Some(serde_json::json!([])));
        assert_eq!(req.settings, Some(serde_json::json!({})));
    }

    #[test]
    fn backup_file_name_uses_export_date() {
        let backup = Backup {
            projects: Catalog::default(),
            settings: Settings::default(),
            exported: Utc.with_ymd_and_hms(2025, 1, 31, 23, 0, 0).unwrap(),
        };
        assert_eq!(backup.file_name(), "magda-portfolio-backup-2025-01-31.json");
    }
}
