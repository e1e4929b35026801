//! Publish Service - hands documents to the configured publisher.

use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        dto::{Backup, PublishReceipt, PublishRequest},
        ports::{CatalogStore, Publisher},
    },
    error::FolioResult,
};

pub struct PublishService {
    publisher: Box<dyn Publisher>,
}

impl PublishService {
    pub fn new(publisher: Box<dyn Publisher>) -> Self {
        Self { publisher }
    }

    pub fn publisher_name(&self) -> &'static str {
        self.publisher.name()
    }

    /// Publish a request as received.
    ///
    /// The documents are not checked; they reach the destination as sent.
    /// A request carrying neither document succeeds without touching the
    /// destination.
    #[instrument(skip_all, fields(publisher = self.publisher.name()))]
    pub async fn publish(&self, request: &PublishRequest) -> FolioResult<PublishReceipt> {
        if request.is_empty() {
            warn!("Publish request carried no documents");
            return Ok(PublishReceipt::new(self.publisher.name()));
        }

        let receipt = self.publisher.publish(request).await?;
        info!(files = ?receipt.file_names(), "Published");
        Ok(receipt)
    }

    /// Publish both local documents.
    ///
    /// A local document that exists but cannot be parsed stops the publish
    /// instead of sending the fallback in its place.
    pub async fn publish_from(
        &self,
        store: &dyn CatalogStore,
        message: Option<String>,
    ) -> FolioResult<PublishReceipt> {
        let mut request = PublishRequest::from_documents(
            &store.load_projects_for_update()?,
            &store.load_settings_for_update()?,
        )?;
        if let Some(message) = message {
            request = request.with_message(message);
        }
        self.publish(&request).await
    }

    /// Snapshot both local documents as `{projects, settings, exported}`.
    pub fn export_backup(store: &dyn CatalogStore) -> FolioResult<Backup> {
        Ok(Backup {
            projects: store.load_projects()?,
            settings: store.load_settings()?,
            exported: Utc::now(),
        })
    }
}
