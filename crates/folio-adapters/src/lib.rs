//! Infrastructure adapters for Folio.
//!
//! This crate implements the ports defined in `folio-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod publisher;
pub mod renderer;
pub mod store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use publisher::{GitHubPublisher, GitHubTarget, GitPublisher, GitTarget, RemotePublisher};
pub use renderer::HtmlRenderer;
pub use store::JsonFileStore;
