// ============================================================================
// domain/error.rs - CATALOG ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so services can log and return the same value)
/// - Categorizable (for CLI display and HTTP status mapping)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Invalid project id '{id}': {reason}")]
    InvalidProjectId { id: String, reason: String },

    #[error("Path escapes the output root: {path}")]
    PathOutsideRoot { path: String },

    #[error("Duplicate page in site bundle: {path}")]
    DuplicatePage { path: String },

    #[error("Site bundle is empty")]
    EmptyBundle,

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("No project with id '{id}'")]
    ProjectNotFound { id: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Could not generate a unique project id after {attempts} attempts")]
    IdExhausted { attempts: usize },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingRequiredField { field } => vec![
                format!("Provide a value for '{}'", field),
                "Blank values (only whitespace) count as missing".into(),
            ],
            Self::InvalidProjectId { id, reason } => vec![
                format!("'{}' is not a usable id: {}", id, reason),
                "List existing ids with: folio project list".into(),
            ],
            Self::ProjectNotFound { id } => vec![
                format!("No project has the id '{}'", id),
                "List existing ids with: folio project list".into(),
            ],
            Self::IdExhausted { .. } => vec![
                "The id generator kept producing ids that already exist".into(),
                "Try again; ids include the current time".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingRequiredField { .. }
            | Self::InvalidProjectId { .. }
            | Self::PathOutsideRoot { .. } => ErrorCategory::Validation,
            Self::ProjectNotFound { .. } => ErrorCategory::NotFound,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
