//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `folio-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `CatalogStore`: `projects.json` / `settings.json` persistence
//!   - `SiteRenderer`: HTML rendering
//!   - `Publisher`: Pushing documents to the live site's source
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (The CLI and the HTTP server call services directly)

pub mod output;

pub use output::{CatalogStore, Filesystem, Publisher, SiteRenderer};
