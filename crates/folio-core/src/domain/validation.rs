use crate::domain::{
    entities::{ProjectDraft, SiteBundle},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_draft(draft: &ProjectDraft) -> Result<(), DomainError> {
        draft.validate()
    }

    pub fn validate_site_bundle(bundle: &SiteBundle) -> Result<(), DomainError> {
        bundle.validate()
    }
}
