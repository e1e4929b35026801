//! Folio Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Folio, a
//! small portfolio site whose content lives in two JSON documents
//! (`projects.json` and `settings.json`).
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │     folio-cli / folio-server            │
//! │     (Drive the application)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (Catalog, Settings, Site, Publish)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Store, Filesystem, Renderer, Publisher)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      folio-adapters (Infrastructure)    │
//! │ (JsonFileStore, HtmlRenderer, GitHub..) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use folio_core::prelude::*;
//!
//! fn add(store: Box<dyn CatalogStore>) -> FolioResult<()> {
//!     let service = CatalogService::new(store);
//!     let project = service.create(ProjectDraft::new("Sjökort", Category::Maps))?;
//!     println!("created {}", project.id);
//!     Ok(())
//! }
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Backup, BuildReport, CatalogService, PublishReceipt, PublishRequest, PublishService,
        PublishedFile, SettingsService, SiteService,
        ports::{CatalogStore, Filesystem, Publisher, SiteRenderer},
    };
    pub use crate::domain::{
        Catalog, Category, Contact, DashboardStats, Project, ProjectDraft, ProjectId, Settings,
        SiteBundle, TopBar,
    };
    pub use crate::error::{FolioError, FolioResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
