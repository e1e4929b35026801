//! Publisher that writes into a local working copy and pushes with git.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;
use tokio::process::Command;
use tracing::{debug, info, instrument};

use folio_core::{
    application::{
        ApplicationError, PublishReceipt, PublishRequest, PublishedFile,
        ports::{Filesystem, Publisher},
    },
    error::FolioResult,
};

use crate::store::to_pretty_json;

/// Where the working copy lives and where to push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitTarget {
    pub working_dir: PathBuf,
    /// Relative to `working_dir`.
    pub projects_path: PathBuf,
    /// Relative to `working_dir`.
    pub settings_path: PathBuf,
    pub remote: String,
    pub branch: String,
}

impl Default for GitTarget {
    fn default() -> Self {
        Self {
            working_dir: PathBuf::from("."),
            projects_path: PathBuf::from("new/data/projects.json"),
            settings_path: PathBuf::from("new/data/settings.json"),
            remote: "origin".into(),
            branch: "main".into(),
        }
    }
}

pub struct GitPublisher {
    filesystem: Arc<dyn Filesystem>,
    target: GitTarget,
    program: OsString,
}

impl GitPublisher {
    pub fn new(filesystem: Arc<dyn Filesystem>, target: GitTarget) -> Self {
        Self {
            filesystem,
            target,
            program: OsString::from("git"),
        }
    }

    /// Run a different git executable.
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    /// Commit message used when the request carries none.
    pub fn default_message() -> String {
        format!(
            "🎨 Portfolio uppdaterat via admin-panel\n\nÄndringar gjorda: {}\n\n🤖 Auto-commited via webhook",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )
    }

    fn write_document(&self, relative: &Path, json: &str) -> FolioResult<bool> {
        let path = self.target.working_dir.join(relative);
        let existed = self.filesystem.exists(&path);
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&path, json)?;
        Ok(!existed)
    }

    /// Run one git command in the working copy; non-zero exit is an error.
    #[instrument(skip(self), fields(cwd = %self.target.working_dir.display()))]
    async fn git(&self, args: &[String]) -> FolioResult<()> {
        let shown = display_command(args);
        debug!(command = %shown, "Running");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.target.working_dir)
            .output()
            .await
            .map_err(|e| ApplicationError::CommandFailed {
                command: shown.clone(),
                output: e.to_string(),
            })?;

        if !output.status.success() {
            let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
            combined.push_str(&String::from_utf8_lossy(&output.stderr));
            return Err(ApplicationError::CommandFailed {
                command: shown,
                output: combined,
            }
            .into());
        }
        Ok(())
    }
}

fn display_command(args: &[String]) -> String {
    let mut parts = vec!["git".to_string()];
    for arg in args {
        if arg.contains(char::is_whitespace) {
            parts.push(format!("{:?}", arg.lines().next().unwrap_or_default()));
        } else {
            parts.push(arg.clone());
        }
    }
    parts.join(" ")
}

#[async_trait]
impl Publisher for GitPublisher {
    fn name(&self) -> &'static str {
        "git"
    }

    #[instrument(skip_all, fields(remote = %self.target.remote, branch = %self.target.branch))]
    async fn publish(&self, request: &PublishRequest) -> FolioResult<PublishReceipt> {
        let mut receipt = PublishReceipt::new(self.name());
        let mut staged = Vec::new();

        if let Some(projects) = &request.projects {
            let rel = &self.target.projects_path;
            let created = self.write_document(rel, &to_pretty_json(rel, projects)?)?;
            staged.push((rel.clone(), created));
        }
        if let Some(settings) = &request.settings {
            let rel = &self.target.settings_path;
            let created = self.write_document(rel, &to_pretty_json(rel, settings)?)?;
            staged.push((rel.clone(), created));
        }

        if staged.is_empty() {
            return Ok(receipt);
        }

        let message = request
            .message
            .clone()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(Self::default_message);

        let mut add = vec!["add".to_string()];
        add.extend(staged.iter().map(|(p, _)| p.to_string_lossy().into_owned()));
        self.git(&add).await?;
        self.git(&["commit".into(), "-m".into(), message]).await?;
        self.git(&[
            "push".into(),
            self.target.remote.clone(),
            self.target.branch.clone(),
        ])
        .await?;

        info!(files = staged.len(), "Committed and pushed");
        for (path, created) in staged {
            receipt = receipt.with_file(PublishedFile {
                path: path.to_string_lossy().into_owned(),
                created,
                commit: None,
            });
        }
        Ok(receipt)
    }
}
