//! Application layer for Folio.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (CatalogService, SettingsService,
//!   SiteService, PublishService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **DTOs**: Publish requests, receipts and backups
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod dto;
pub mod error;
pub mod ports;
pub mod services;

pub use services::{CatalogService, PublishService, SettingsService, SiteService};

pub use ports::{CatalogStore, Filesystem, Publisher, SiteRenderer};

pub use dto::{Backup, BuildReport, PublishReceipt, PublishRequest, PublishedFile};
pub use error::ApplicationError;
