// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Folio.
//!
//! This module contains the portfolio model with no I/O. Reading and
//! writing documents, rendering HTML and talking to a repository are
//! handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Serde shapes only**: Entities derive the document shapes of
//!   `projects.json` / `settings.json` and nothing else
//! - **Rich domain model**: Behavior lives in entities, not services
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod id;
pub mod lenient;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    catalog::{Catalog, DashboardStats},
    common::RelativePath,
    project::{Project, ProjectDraft},
    settings::{Contact, Settings, TopBar},
    site_bundle::{Page, SiteBundle},
};

pub use error::{DomainError, ErrorCategory};
pub use id::{IdSource, ProjectId, TimestampIds};
pub use validation::DomainValidator;
pub use value_objects::Category;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Cross-entity behaviour
    // ========================================================================

    #[test]
    fn catalog_add_with_timestamp_ids() {
        let mut catalog = Catalog::default();
        let first = catalog
            .add(ProjectDraft::new("Ett", Category::Books), &TimestampIds)
            .unwrap();
        let second = catalog
            .add(ProjectDraft::new("Två", Category::Books), &TimestampIds)
            .unwrap();

        assert_ne!(first, second);
        assert!(!first.is_blank());
        assert_eq!(catalog.stats().total, 2);
    }

    #[test]
    fn catalog_document_round_trip() {
        let json = r#"[
          {
            "id": "m8k2",
            "title": "Underlägg",
            "category": "shop",
            "description": "Handgjorda",
            "price": "150 kr",
            "image": "images/underlagg.jpg",
            "available": true,
            "featured": true
          }
        ]"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert!(catalog.validate().is_ok());

        let reparsed: Catalog =
            serde_json::from_str(&serde_json::to_string_pretty(&catalog).unwrap()).unwrap();
        assert_eq!(reparsed, catalog);
    }

    #[test]
    fn blank_draft_fails_validation() {
        let draft = ProjectDraft::new(" ", Category::Art);
        assert_eq!(
            DomainValidator::validate_draft(&draft),
            Err(DomainError::MissingRequiredField { field: "title" })
        );
    }
}
