//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `folio-adapters` crate provides implementations.

use async_trait::async_trait;
use std::path::Path;

use crate::application::dto::{PublishReceipt, PublishRequest};
use crate::domain::{Catalog, Settings, SiteBundle};
use crate::error::FolioResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `folio_adapters::filesystem::LocalFilesystem` (production)
/// - `folio_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> FolioResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> FolioResult<()>;

    /// Read a file. `Ok(None)` when it does not exist.
    fn read_file(&self, path: &Path) -> FolioResult<Option<String>>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> FolioResult<()>;
}

/// Port for the two data documents.
///
/// `load_*` never fails on a missing or unparsable document: projects fall
/// back to an empty catalog and settings to [`Settings::default`]. Errors
/// are reserved for I/O that actually broke.
///
/// `load_*_for_update` is what a read-modify-write uses. A missing document
/// still falls back, but one that exists and cannot be parsed is an
/// [`UnreadableDocument`](crate::application::ApplicationError::UnreadableDocument)
/// error, so the fallback is never saved over it.
pub trait CatalogStore: Send + Sync {
    fn load_projects(&self) -> FolioResult<Catalog>;

    fn load_projects_for_update(&self) -> FolioResult<Catalog>;

    fn save_projects(&self, catalog: &Catalog) -> FolioResult<()>;

    fn load_settings(&self) -> FolioResult<Settings>;

    fn load_settings_for_update(&self) -> FolioResult<Settings>;

    fn save_settings(&self, settings: &Settings) -> FolioResult<()>;
}

/// Port for turning the documents into HTML pages.
///
/// Implemented by:
/// - `folio_adapters::renderer::HtmlRenderer`
pub trait SiteRenderer: Send + Sync {
    /// Render every page of the site.
    ///
    /// # Arguments
    ///
    /// * `catalog` - Projects to render
    /// * `settings` - Top bar and contact details
    /// * `output_root` - Root directory the bundle will be written under
    fn render(
        &self,
        catalog: &Catalog,
        settings: &Settings,
        output_root: &Path,
    ) -> FolioResult<SiteBundle>;
}

/// Port for pushing documents to wherever the live site is built from.
///
/// Implemented by:
/// - `folio_adapters::publisher::GitHubPublisher` (contents API)
/// - `folio_adapters::publisher::GitPublisher` (local working copy)
/// - `folio_adapters::publisher::RemotePublisher` (a deployed update endpoint)
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Short name used in logs and receipts.
    fn name(&self) -> &'static str;

    /// Publish whatever documents the request carries.
    async fn publish(&self, request: &PublishRequest) -> FolioResult<PublishReceipt>;
}
