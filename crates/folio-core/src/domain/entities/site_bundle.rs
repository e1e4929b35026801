use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// Rendered site ready for materialization.
///
/// This is the output of the renderer. It contains no business logic,
/// only pages keyed by their path relative to the output root.
#[derive(Debug, Clone)]
pub struct SiteBundle {
    pub(crate) root: PathBuf,
    pub(crate) pages: Vec<Page>,
}

/// One rendered HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub path: RelativePath,
    pub html: String,
}

impl SiteBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            pages: Vec::new(),
        }
    }

    pub fn add_page(&mut self, path: &str, html: String) -> Result<(), DomainError> {
        self.pages.push(Page {
            path: RelativePath::try_new(path)?,
            html,
        });
        Ok(())
    }

    pub fn with_page(mut self, path: &str, html: String) -> Result<Self, DomainError> {
        self.add_page(path, html)?;
        Ok(self)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, path: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.path.as_str() == path)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.pages.is_empty() {
            return Err(DomainError::EmptyBundle);
        }

        let mut seen = HashSet::new();
        for page in &self.pages {
            if !seen.insert(page.path.as_str()) {
                return Err(DomainError::DuplicatePage {
                    path: page.path.to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bundle_is_invalid() {
        assert_eq!(SiteBundle::new("dist").validate(), Err(DomainError::EmptyBundle));
    }

    #[test]
    fn duplicate_pages_are_rejected() {
        let bundle = SiteBundle::new("dist")
            .with_page("index.html", "a".into())
            .unwrap()
            .with_page("index.html", "b".into())
            .unwrap();
        assert!(matches!(
            bundle.validate(),
            Err(DomainError::DuplicatePage { .. })
        ));
    }

    #[test]
    fn escaping_paths_are_rejected() {
        let mut bundle = SiteBundle::new("dist");
        assert!(bundle.add_page("../index.html", String::new()).is_err());
        assert!(bundle.add_page("projects/a.html", String::new()).is_ok());
        assert!(bundle.page("projects/a.html").is_some());
    }
}
