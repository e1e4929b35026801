//! Command handlers.
//!
//! Each handler translates parsed arguments into calls on the core services,
//! wired to the adapters selected by configuration, and prints the result.

pub mod build;
pub mod completions;
pub mod config;
pub mod export;
pub mod init;
pub mod project;
pub mod publish;
pub mod serve;
pub mod settings;
pub mod stats;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use folio_adapters::{
    GitHubPublisher, GitHubTarget, GitPublisher, GitTarget, JsonFileStore, LocalFilesystem,
    RemotePublisher,
};
use folio_core::application::ports::Publisher;

use crate::{
    cli::GlobalArgs,
    config::{AppConfig, PublisherKind},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Everything a command handler needs.
pub struct Context {
    pub global: GlobalArgs,
    pub config: AppConfig,
    pub output: OutputManager,
}

impl Context {
    pub fn new(global: GlobalArgs, config: AppConfig, output: OutputManager) -> Self {
        Self {
            global,
            config,
            output,
        }
    }

    /// `--data-dir`, else `site.data_dir`.
    pub fn data_dir(&self) -> PathBuf {
        self.global
            .data_dir
            .clone()
            .unwrap_or_else(|| self.config.site.data_dir.clone())
    }

    /// Document store over the local data directory.
    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(Arc::new(LocalFilesystem::new()), self.data_dir())
    }

    /// Build the publisher `kind` from configuration.
    pub fn publisher(&self, kind: PublisherKind) -> CliResult<Box<dyn Publisher>> {
        debug!(publisher = %kind, "Building publisher");
        let config = &self.config;

        let publisher: Box<dyn Publisher> = match kind {
            PublisherKind::Github => Box::new(GitHubPublisher::new(GitHubTarget {
                api_base: config.github.api_base.clone(),
                owner: config.github.owner.clone(),
                repo: config.github.repo.clone(),
                branch: config.github.branch.clone(),
                projects_path: config.github.projects_path.clone(),
                settings_path: config.github.settings_path.clone(),
                token: config.github.token.clone().unwrap_or_default(),
            })?),
            PublisherKind::Git => Box::new(GitPublisher::new(
                Arc::new(LocalFilesystem::new()),
                GitTarget {
                    working_dir: config.git.working_dir.clone(),
                    projects_path: config.git.projects_path.clone(),
                    settings_path: config.git.settings_path.clone(),
                    remote: config.git.remote.clone(),
                    branch: config.git.branch.clone(),
                },
            )),
            PublisherKind::Remote => {
                let endpoint = config.remote.endpoint.clone().ok_or_else(|| {
                    CliError::ConfigError {
                        message: "remote.endpoint is not set".into(),
                        source: None,
                    }
                })?;
                Box::new(RemotePublisher::new(endpoint)?)
            }
        };
        Ok(publisher)
    }

    /// Current-thread runtime for one-shot async work.
    pub fn runtime(&self) -> CliResult<tokio::runtime::Runtime> {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| CliError::IoError {
                message: "Failed to start the async runtime".into(),
                source: e,
            })
    }
}
