//! Catalog Service - project CRUD over the projects document.
//!
//! Every mutation is load, change, save. The store is the only state, and
//! a projects document that cannot be parsed is never saved over.

use tracing::{info, instrument};

use crate::{
    application::ports::CatalogStore,
    domain::{
        Catalog, DashboardStats, DomainError, DomainValidator as validator, IdSource, Project,
        ProjectDraft, ProjectId, TimestampIds,
    },
    error::{FolioError, FolioResult},
};

/// Project management service.
pub struct CatalogService {
    store: Box<dyn CatalogStore>,
    ids: Box<dyn IdSource>,
}

impl CatalogService {
    /// Create a service that mints ids from the current time.
    pub fn new(store: Box<dyn CatalogStore>) -> Self {
        Self {
            store,
            ids: Box::new(TimestampIds),
        }
    }

    /// Replace the id source.
    pub fn with_id_source(mut self, ids: Box<dyn IdSource>) -> Self {
        self.ids = ids;
        self
    }

    pub fn list(&self) -> FolioResult<Catalog> {
        self.store.load_projects()
    }

    /// Look up one project.
    pub fn get(&self, id: &str) -> FolioResult<Project> {
        let id = ProjectId::parse(id)?;
        let catalog = self.store.load_projects()?;
        catalog
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(&id))
    }

    /// Add a project built from `draft` and persist the catalog.
    #[instrument(skip_all, fields(title = %draft.title))]
    pub fn create(&self, draft: ProjectDraft) -> FolioResult<Project> {
        validator::validate_draft(&draft)?;

        let mut catalog = self.store.load_projects_for_update()?;
        let id = catalog.add(draft, self.ids.as_ref())?;
        self.store.save_projects(&catalog)?;

        info!(id = %id, total = catalog.len(), "Project created");
        catalog.get(&id).cloned().ok_or_else(|| not_found(&id))
    }

    /// Overwrite the editable fields of an existing project.
    #[instrument(skip_all, fields(id = %id))]
    pub fn edit(&self, id: &str, draft: ProjectDraft) -> FolioResult<Project> {
        validator::validate_draft(&draft)?;
        let id = ProjectId::parse(id)?;

        let mut catalog = self.store.load_projects_for_update()?;
        let updated = catalog.update(&id, draft)?.clone();
        self.store.save_projects(&catalog)?;

        info!("Project updated");
        Ok(updated)
    }

    /// Remove a project and return it.
    #[instrument(skip_all, fields(id = %id))]
    pub fn delete(&self, id: &str) -> FolioResult<Project> {
        let id = ProjectId::parse(id)?;

        let mut catalog = self.store.load_projects_for_update()?;
        let removed = catalog.remove(&id)?;
        self.store.save_projects(&catalog)?;

        info!(remaining = catalog.len(), "Project deleted");
        Ok(removed)
    }

    pub fn stats(&self) -> FolioResult<DashboardStats> {
        Ok(self.store.load_projects()?.stats())
    }
}

fn not_found(id: &ProjectId) -> FolioError {
    DomainError::ProjectNotFound { id: id.to_string() }.into()
}
