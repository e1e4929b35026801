//! Unified error handling for Folio Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Folio Core operations.
///
/// This enum wraps all possible errors that can occur when using folio-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum FolioError {
    /// Errors from the domain layer (business logic violations).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl FolioError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Folio".into(),
                "Please report this issue at: https://github.com/cosecruz/folio/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type FolioResult<T> = Result<T, FolioError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> FolioResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> FolioResult<T> {
        self.map_err(|e| FolioError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_category_flows_through() {
        let err: FolioError = DomainError::ProjectNotFound { id: "x".into() }.into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.to_string(), "No project with id 'x'");
    }

    #[test]
    fn remote_status_keeps_client_wording() {
        let err: FolioError = ApplicationError::RemoteStatus { status: 502 }.into();
        assert_eq!(err.to_string(), "HTTP error! status: 502");
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn git_failure_names_the_command() {
        let err: FolioError = ApplicationError::CommandFailed {
            command: "git push origin main".into(),
            output: "rejected".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Git command failed: git push origin main");
        assert!(err.suggestions().iter().any(|s| s.contains("rejected")));
    }

    #[test]
    fn context_wraps_as_internal() {
        let res: Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
        let err = res.context("reading").unwrap_err();
        assert!(matches!(err, FolioError::Internal { .. }));
        assert!(err.to_string().contains("reading: boom"));
    }
}
