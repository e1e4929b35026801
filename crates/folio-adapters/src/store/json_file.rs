//! JSON document store over a [`Filesystem`].
//!
//! The data directory holds two files:
//!
//! ```text
//! data/
//! ├── projects.json   ← array of projects
//! └── settings.json   ← { "topBar": {...}, "contact": {...} }
//! ```
//!
//! Both are written pretty-printed with two-space indentation, which is what
//! the live site and the publishers expect.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, warn};

use folio_core::{
    application::{ApplicationError, ports::CatalogStore, ports::Filesystem},
    domain::{Catalog, Settings},
    error::FolioResult,
};

pub const PROJECTS_FILE: &str = "projects.json";
pub const SETTINGS_FILE: &str = "settings.json";

/// Store that keeps both documents as JSON files in one directory.
#[derive(Clone)]
pub struct JsonFileStore {
    filesystem: Arc<dyn Filesystem>,
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(filesystem: Arc<dyn Filesystem>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            filesystem,
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn projects_path(&self) -> PathBuf {
        self.data_dir.join(PROJECTS_FILE)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join(SETTINGS_FILE)
    }

    /// Read and parse a document.
    fn read_document<T: DeserializeOwned>(&self, path: &Path) -> FolioResult<Document<T>> {
        let Some(raw) = self.filesystem.read_file(path)? else {
            debug!(path = %path.display(), "Document missing");
            return Ok(Document::Missing);
        };

        Ok(match serde_json::from_str(&raw) {
            Ok(doc) => Document::Parsed(doc),
            Err(e) => Document::Invalid(e.to_string()),
        })
    }

    fn write_document<T: Serialize>(&self, path: &Path, document: &T) -> FolioResult<()> {
        let json = to_pretty_json(path, document)?;
        self.filesystem.create_dir_all(&self.data_dir)?;
        self.filesystem.write_file(path, &json)
    }
}

/// What reading a document found.
enum Document<T> {
    Missing,
    Parsed(T),
    Invalid(String),
}

impl<T> Document<T> {
    /// The parsed document, or `fallback` when it is missing or invalid.
    fn or_fallback(self, path: &Path, fallback: impl FnOnce() -> T) -> T {
        match self {
            Self::Parsed(doc) => doc,
            Self::Missing => {
                warn!(path = %path.display(), "Document missing, using fallback");
                fallback()
            }
            Self::Invalid(reason) => {
                warn!(path = %path.display(), error = %reason, "Document is not valid, using fallback");
                fallback()
            }
        }
    }

    /// Like [`or_fallback`](Self::or_fallback), but an invalid document is
    /// an error: whatever the caller saves next would replace it.
    fn for_update(self, path: &Path, fallback: impl FnOnce() -> T) -> FolioResult<T> {
        match self {
            Self::Invalid(reason) => Err(ApplicationError::UnreadableDocument {
                document: path.display().to_string(),
                reason,
            }
            .into()),
            other => Ok(other.or_fallback(path, fallback)),
        }
    }
}

/// Serialize the way every writer in this crate does: two-space indent, no
/// trailing newline, keys in document order.
pub(crate) fn to_pretty_json<T: Serialize>(path: &Path, document: &T) -> FolioResult<String> {
    let json =
        serde_json::to_string_pretty(document).map_err(|e| ApplicationError::Serialization {
            document: path.display().to_string(),
            reason: e.to_string(),
        })?;
    Ok(json)
}

impl CatalogStore for JsonFileStore {
    #[instrument(skip(self))]
    fn load_projects(&self) -> FolioResult<Catalog> {
        let path = self.projects_path();
        let catalog = self.read_document(&path)?.or_fallback(&path, Catalog::default);
        warn_on_problems(&catalog);
        Ok(catalog)
    }

    #[instrument(skip(self))]
    fn load_projects_for_update(&self) -> FolioResult<Catalog> {
        let path = self.projects_path();
        let catalog = self.read_document(&path)?.for_update(&path, Catalog::default)?;
        warn_on_problems(&catalog);
        Ok(catalog)
    }

    #[instrument(skip_all, fields(projects = catalog.len()))]
    fn save_projects(&self, catalog: &Catalog) -> FolioResult<()> {
        self.write_document(&self.projects_path(), catalog)
    }

    #[instrument(skip(self))]
    fn load_settings(&self) -> FolioResult<Settings> {
        let path = self.settings_path();
        Ok(self.read_document(&path)?.or_fallback(&path, Settings::default))
    }

    #[instrument(skip(self))]
    fn load_settings_for_update(&self) -> FolioResult<Settings> {
        let path = self.settings_path();
        self.read_document(&path)?.for_update(&path, Settings::default)
    }

    #[instrument(skip_all)]
    fn save_settings(&self, settings: &Settings) -> FolioResult<()> {
        self.write_document(&self.settings_path(), settings)
    }
}

fn warn_on_problems(catalog: &Catalog) {
    if let Err(e) = catalog.validate() {
        warn!(error = %e, "Projects document has problems");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::MemoryFilesystem;
    use folio_core::application::CatalogService;
    use folio_core::domain::{Category, ProjectDraft, TimestampIds};

    fn store() -> (MemoryFilesystem, JsonFileStore) {
        let fs = MemoryFilesystem::new();
        let store = JsonFileStore::new(Arc::new(fs.clone()), "/site/data");
        (fs, store)
    }

    #[test]
    fn missing_documents_fall_back() {
        let (_, store) = store();
        assert!(store.load_projects().unwrap().is_empty());
        assert_eq!(store.load_settings().unwrap(), Settings::default());
    }

    #[test]
    fn corrupt_documents_fall_back() {
        let (fs, store) = store();
        fs.seed("/site/data/projects.json", "{ not json");
        fs.seed("/site/data/settings.json", "[1, 2]");

        assert!(store.load_projects().unwrap().is_empty());
        assert_eq!(store.load_settings().unwrap(), Settings::default());
    }

    #[test]
    fn saved_projects_are_pretty_and_camel_case() {
        let (fs, store) = store();
        let mut catalog = Catalog::default();
        let mut draft = ProjectDraft::new("Karta", Category::Maps);
        draft.long_description = Some("Rad ett\nRad två".into());
        catalog.add(draft, &TimestampIds).unwrap();

        store.save_projects(&catalog).unwrap();

        let raw = fs.contents("/site/data/projects.json").unwrap();
        assert!(raw.starts_with("[\n  {"));
        assert!(raw.contains("\"longDescription\""));
        assert!(raw.ends_with("\n  }\n]"));
        assert_eq!(store.load_projects().unwrap(), catalog);
    }

    #[test]
    fn unknown_settings_keys_survive_a_save() {
        let (fs, store) = store();
        fs.seed(
            "/site/data/settings.json",
            r#"{"contact":{"email":"a@b.se","phone":"1"},"instagram":"@magda"}"#,
        );

        let settings = store.load_settings().unwrap();
        assert!(settings.top_bar.is_none());
        store.save_settings(&settings).unwrap();

        let raw = fs.contents("/site/data/settings.json").unwrap();
        assert!(raw.contains("\"instagram\": \"@magda\""));
        assert!(!raw.contains("topBar"));
    }

    #[test]
    fn unreadable_documents_are_not_loaded_for_update() {
        let (fs, store) = store();
        fs.seed("/site/data/projects.json", "[{\"id\": \"a\"}, 42]");
        fs.seed("/site/data/settings.json", "{ not json");

        let err = store.load_projects_for_update().unwrap_err();
        assert!(err.to_string().contains("projects.json exists but could not be read"));
        assert!(store.load_settings_for_update().is_err());

        // Plain loads still fall back for display.
        assert!(store.load_projects().unwrap().is_empty());
    }

    #[test]
    fn missing_documents_load_for_update() {
        let (_, store) = store();
        assert!(store.load_projects_for_update().unwrap().is_empty());
        assert_eq!(store.load_settings_for_update().unwrap(), Settings::default());
    }

    #[test]
    fn failed_edit_leaves_the_document_untouched() {
        let (fs, store) = store();
        let original = r#"[{"id":"a","title":"A","category":"art"}, "stray"]"#;
        fs.seed("/site/data/projects.json", original);

        let service = CatalogService::new(Box::new(store));
        assert!(service.create(ProjectDraft::new("Ny", Category::Art)).is_err());
        assert_eq!(fs.contents("/site/data/projects.json").unwrap(), original);
    }

    #[test]
    fn hand_edited_values_keep_every_project_through_an_add() {
        let (fs, store) = store();
        fs.seed(
            "/site/data/projects.json",
            r#"[
              {"id":"a","title":"Gotland","category":"maps","year":2023,"price":450},
              {"id":"b","title":"Affisch","category":"ads","available":1}
            ]"#,
        );

        let service = CatalogService::new(Box::new(store.clone()));
        service.create(ProjectDraft::new("Ny", Category::Art)).unwrap();

        let catalog = store.load_projects().unwrap();
        assert_eq!(catalog.len(), 3);
        let gotland = &catalog.projects()[0];
        assert_eq!(gotland.year.as_deref(), Some("2023"));
        assert_eq!(gotland.price, "450");
        assert!(catalog.projects()[1].available);

        let raw = fs.contents("/site/data/projects.json").unwrap();
        assert!(raw.contains("\"year\": \"2023\""));
    }
}
