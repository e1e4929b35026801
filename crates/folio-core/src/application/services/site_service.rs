//! Site Service - renders the documents and writes the static pages.
//!
//! 1. Load projects and settings
//! 2. Render them into a `SiteBundle`
//! 3. Write the bundle, rolling back a freshly created root on failure

use std::path::Path;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        dto::BuildReport,
        ports::{CatalogStore, Filesystem, SiteRenderer},
    },
    domain::{DomainValidator as validator, SiteBundle},
    error::FolioResult,
};

pub struct SiteService {
    store: Box<dyn CatalogStore>,
    renderer: Box<dyn SiteRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl SiteService {
    pub fn new(
        store: Box<dyn CatalogStore>,
        renderer: Box<dyn SiteRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
        }
    }

    /// Render the whole site under `output_root`.
    ///
    /// Existing files with the same names are overwritten; other files in
    /// the directory are left alone.
    #[instrument(skip_all, fields(output = %output_root.as_ref().display()))]
    pub fn build(&self, output_root: impl AsRef<Path>) -> FolioResult<BuildReport> {
        let output_root = output_root.as_ref();

        let catalog = self.store.load_projects()?;
        let settings = self.store.load_settings()?;
        info!(projects = catalog.len(), "Rendering site");

        let bundle = self.renderer.render(&catalog, &settings, output_root)?;
        validator::validate_site_bundle(&bundle)?;

        self.write_bundle(&bundle)?;

        let pages = bundle
            .pages()
            .iter()
            .map(|p| p.path.to_string())
            .collect::<Vec<_>>();
        info!(pages = pages.len(), "Site written");

        Ok(BuildReport {
            root: bundle.root().to_path_buf(),
            pages,
        })
    }

    /// Write the bundle. A root this call created is removed again if any
    /// write fails.
    fn write_bundle(&self, bundle: &SiteBundle) -> FolioResult<()> {
        let fresh = !self.filesystem.exists(bundle.root());

        match self.write_all(bundle) {
            Ok(()) => Ok(()),
            Err(e) => {
                if fresh {
                    warn!("Write failed, attempting rollback");
                    self.rollback(bundle.root());
                } else {
                    warn!("Write failed in an existing directory, leaving it as is");
                }
                Err(e)
            }
        }
    }

    fn write_all(&self, bundle: &SiteBundle) -> FolioResult<()> {
        self.filesystem.create_dir_all(bundle.root())?;

        for page in bundle.pages() {
            let path = bundle.root().join(page.path.as_path());
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, &page.html)?;
        }

        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(error = %e, path = %root.display(), "Rollback failed");
        } else {
            info!("Rollback successful");
        }
    }
}
