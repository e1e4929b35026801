use tracing::{info, instrument};

use crate::{
    application::ports::CatalogStore,
    domain::{Contact, Settings, TopBar},
    error::FolioResult,
};

/// Reads and updates the settings document one section at a time.
///
/// Updating a section keeps the other section and any unknown keys.
pub struct SettingsService {
    store: Box<dyn CatalogStore>,
}

impl SettingsService {
    pub fn new(store: Box<dyn CatalogStore>) -> Self {
        Self { store }
    }

    pub fn get(&self) -> FolioResult<Settings> {
        self.store.load_settings()
    }

    #[instrument(skip_all)]
    pub fn update_top_bar(&self, top_bar: TopBar) -> FolioResult<Settings> {
        let mut settings = self.store.load_settings_for_update()?;
        settings.top_bar = Some(top_bar);
        self.store.save_settings(&settings)?;
        info!("Top bar updated");
        Ok(settings)
    }

    #[instrument(skip_all)]
    pub fn update_contact(&self, contact: Contact) -> FolioResult<Settings> {
        let mut settings = self.store.load_settings_for_update()?;
        settings.contact = Some(contact);
        self.store.save_settings(&settings)?;
        info!("Contact details updated");
        Ok(settings)
    }

    pub fn replace(&self, settings: &Settings) -> FolioResult<()> {
        self.store.save_settings(settings)
    }
}
