//! The project catalog aggregate.
//!
//! A catalog is the ordered content of `projects.json`. Order is the order
//! the admin created projects in and is the order the site renders them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::project::{Project, ProjectDraft},
    error::DomainError,
    id::{IdSource, ProjectId},
    value_objects::Category,
};

/// Regeneration attempts before giving up on a colliding id source.
const MAX_ID_ATTEMPTS: usize = 8;

/// Ordered list of projects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    projects: Vec<Project>,
}

/// Counts shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    pub available: usize,
    pub featured: usize,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    pub fn contains(&self, id: &ProjectId) -> bool {
        self.get(id).is_some()
    }

    /// Append a new project built from `draft` and return its id.
    ///
    /// Ids that already exist in the catalog are regenerated.
    pub fn add(&mut self, draft: ProjectDraft, ids: &dyn IdSource) -> Result<ProjectId, DomainError> {
        draft.validate()?;

        let mut attempts = 0;
        let id = loop {
            let candidate = ids.next_id();
            attempts += 1;
            if !candidate.is_blank() && !self.contains(&candidate) {
                break candidate;
            }
            if attempts >= MAX_ID_ATTEMPTS {
                return Err(DomainError::IdExhausted { attempts });
            }
        };

        self.projects.push(Project::from_draft(id.clone(), draft));
        Ok(id)
    }

    /// Overwrite the editable fields of an existing project.
    pub fn update(&mut self, id: &ProjectId, draft: ProjectDraft) -> Result<&Project, DomainError> {
        draft.validate()?;

        let project = self
            .projects
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| DomainError::ProjectNotFound { id: id.to_string() })?;
        project.apply(draft);
        Ok(project)
    }

    /// Remove exactly the project with this id.
    pub fn remove(&mut self, id: &ProjectId) -> Result<Project, DomainError> {
        let index = self
            .projects
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| DomainError::ProjectNotFound { id: id.to_string() })?;
        Ok(self.projects.remove(index))
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            total: self.projects.len(),
            available: self.projects.iter().filter(|p| p.available).count(),
            featured: self.projects.iter().filter(|p| p.featured).count(),
        }
    }

    /// Projects in the same category as `id`, excluding it, in catalog order.
    pub fn related(&self, id: &ProjectId, limit: usize) -> Vec<&Project> {
        let Some(current) = self.get(id) else {
            return Vec::new();
        };
        self.projects
            .iter()
            .filter(|p| p.category == current.category && p.id != current.id)
            .take(limit)
            .collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&Category> {
        let mut seen = HashSet::new();
        self.projects
            .iter()
            .map(|p| &p.category)
            .filter(|c| seen.insert(*c))
            .collect()
    }

    pub fn featured(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }

    /// Validate every record. Blank ids and titles are rejected; duplicate
    /// ids are reported because edits and deletes target the first match.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            project.validate()?;
            if !seen.insert(&project.id) {
                return Err(DomainError::InvalidProjectId {
                    id: project.id.to_string(),
                    reason: "id is used by more than one project".into(),
                });
            }
        }
        Ok(())
    }
}

impl From<Vec<Project>> for Catalog {
    fn from(projects: Vec<Project>) -> Self {
        Self::new(projects)
    }
}
