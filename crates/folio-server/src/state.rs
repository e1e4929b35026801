//! Application State
//!
//! Arc-wrapped state shared across handlers.

use std::sync::Arc;

use folio_core::application::PublishService;

/// Shared application state.
///
/// Each endpoint has its own publisher; an endpoint without one answers
/// every update with a configuration error.
#[derive(Clone, Default)]
pub struct AppState {
    inner: Arc<InnerState>,
}

#[derive(Default)]
struct InnerState {
    update_site: Option<PublishService>,
    webhook: Option<PublishService>,
}

impl AppState {
    pub fn new(update_site: Option<PublishService>, webhook: Option<PublishService>) -> Self {
        Self {
            inner: Arc::new(InnerState {
                update_site,
                webhook,
            }),
        }
    }

    /// Publisher behind `/.netlify/functions/update-site`.
    pub fn update_site(&self) -> Option<&PublishService> {
        self.inner.update_site.as_ref()
    }

    /// Publisher behind `/webhook-handler.php`.
    pub fn webhook(&self) -> Option<&PublishService> {
        self.inner.webhook.as_ref()
    }
}
