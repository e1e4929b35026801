//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! logic. Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A document could not be encoded or decoded.
    #[error("Could not serialize {document}: {reason}")]
    Serialization { document: String, reason: String },

    /// A document exists but cannot be read, so it must not be overwritten.
    #[error("{document} exists but could not be read: {reason}")]
    UnreadableDocument { document: String, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Document store error")]
    StoreLockError,

    /// Site rendering failed.
    #[error("Site rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// The repository host refused or failed a request.
    #[error("{reason}")]
    PublishFailed { reason: String },

    /// A remote endpoint answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    RemoteStatus { status: u16 },

    /// A remote endpoint answered `success: false`.
    #[error("{message}")]
    RemoteRejected { message: String },

    /// A version-control command exited non-zero.
    #[error("Git command failed: {command}")]
    CommandFailed { command: String, output: String },

    /// Port/Adapter not configured.
    #[error("Required adapter not configured: {name}")]
    AdapterNotConfigured { name: &'static str },

    /// Validation failed (application-level, not domain).
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::Serialization { document, .. } => vec![
                format!("Check that {} contains valid JSON", document),
                "Restore it from an export: folio export".into(),
            ],
            Self::UnreadableDocument { document, .. } => vec![
                format!("Fix the JSON in {} or restore it from a backup", document),
                "Nothing was saved, so the file is unchanged".into(),
            ],
            Self::StoreLockError => vec![
                "The document store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::PublishFailed { .. } | Self::RemoteStatus { .. } => vec![
                "Your local changes are still saved".into(),
                "Check the repository settings and token, then publish again".into(),
            ],
            Self::RemoteRejected { .. } => vec![
                "The publish endpoint rejected the update".into(),
                "Check the server log of the endpoint".into(),
            ],
            Self::CommandFailed { output, .. } => {
                let mut out = vec!["Check that the working copy is a git repository with a remote".into()];
                if !output.trim().is_empty() {
                    out.push(format!("git said: {}", output.trim()));
                }
                out
            }
            Self::AdapterNotConfigured { name } => vec![
                format!("Required component not configured: {}", name),
                "Run 'folio config list' to inspect the active configuration".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::Serialization { .. } | Self::RenderingFailed { .. } => ErrorCategory::Internal,
            Self::UnreadableDocument { .. } => ErrorCategory::Validation,
            Self::PublishFailed { .. }
            | Self::RemoteStatus { .. }
            | Self::RemoteRejected { .. }
            | Self::CommandFailed { .. } => ErrorCategory::Internal,
            Self::AdapterNotConfigured { .. } => ErrorCategory::Configuration,
            Self::ValidationFailed(_) => ErrorCategory::Validation,
        }
    }
}
