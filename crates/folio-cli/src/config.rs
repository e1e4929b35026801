//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The CLI
//! owns configuration; core and adapters receive plain values built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `FOLIO__<SECTION>__<KEY>` environment variables
//! 3. The `--config` file, or else `./folio.toml` over the platform file
//! 4. Built-in defaults
//!
//! `GITHUB_TOKEN` fills `github.token` when nothing else set it.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Name of the per-directory configuration file.
pub const LOCAL_CONFIG_FILE: &str = "folio.toml";

const ENV_PREFIX: &str = "FOLIO";
const TOKEN_ENV: &str = "GITHUB_TOKEN";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub site: SiteConfig,
    pub publish: PublishConfig,
    pub github: GitHubConfig,
    pub git: GitConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
    pub server: ServerConfig,
    pub output: OutputConfig,
}

/// Where the documents live and where the site is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub title: String,
}

/// Which publisher `folio publish` uses.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PublisherKind {
    /// Commit through the GitHub contents API.
    #[default]
    Github,
    /// Commit and push from a local working copy.
    Git,
    /// POST to a deployed update-site endpoint.
    Remote,
}

impl std::fmt::Display for PublisherKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Github => write!(f, "github"),
            Self::Git => write!(f, "git"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublishConfig {
    pub publisher: PublisherKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubConfig {
    pub api_base: String,
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub projects_path: String,
    pub settings_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitConfig {
    pub working_dir: PathBuf,
    pub projects_path: PathBuf,
    pub settings_path: PathBuf,
    pub remote: String,
    pub branch: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Full URL of the update-site function.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

/// `folio serve`: listen address and the publisher behind each endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub serve_site: bool,
    pub update_site: PublisherKind,
    pub webhook: PublisherKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("new/data"),
            output_dir: PathBuf::from("site"),
            title: "Magda Korotynska".into(),
        }
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".into(),
            owner: "oujii".into(),
            repo: "magda-portfolio".into(),
            branch: "main".into(),
            projects_path: "new/data/projects.json".into(),
            settings_path: "new/data/settings.json".into(),
            token: None,
        }
    }
}

impl Default for GitConfig {
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

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            serve_site: true,
            update_site: PublisherKind::Github,
            webhook: PublisherKind::Git,
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file(s), then environment.
    ///
    /// An explicit `config_file` must exist; the default locations are
    /// optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to encode built-in defaults")?;
        let mut builder = Config::builder().add_source(defaults);

        match config_file {
            Some(path) => {
                builder = builder.add_source(File::from(path).format(FileFormat::Toml));
            }
            None => {
                if let Some(global) = Self::global_config_path() {
                    builder = builder.add_source(
                        File::from(global.as_path())
                            .format(FileFormat::Toml)
                            .required(false),
                    );
                }
                builder = builder.add_source(
                    File::from(Path::new(LOCAL_CONFIG_FILE))
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        let mut config: Self = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        config.apply_token_fallback(std::env::var(TOKEN_ENV).ok());
        Ok(config)
    }

    /// Use `token` for `github.token` unless one is already configured.
    pub fn apply_token_fallback(&mut self, token: Option<String>) {
        if self.github.token.as_deref().is_none_or(str::is_empty) {
            self.github.token = token.filter(|t| !t.trim().is_empty());
        }
    }

    /// Path of the platform configuration file, when the platform has one.
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("se", "folio", "folio")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Path `folio init` and `folio config path` refer to.
    pub fn config_path() -> PathBuf {
        Self::global_config_path().unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// A copy safe to print: the token is masked.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.github.token.is_some() {
            copy.github.token = Some("********".into());
        }
        copy
    }
}
