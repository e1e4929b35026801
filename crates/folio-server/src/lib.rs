//! Folio HTTP server
//!
//! Receives catalog updates from the admin side and publishes them, and
//! optionally serves the rendered site:
//!
//! - `POST /.netlify/functions/update-site` publishes through the update-site
//!   publisher (normally the GitHub contents API)
//! - `POST /webhook-handler.php` publishes through the webhook publisher
//!   (normally a local git working copy)
//! - `GET /health`
//! - everything else from the site directory, when one is configured

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use tokio::net::TcpListener;
use tracing::{info, warn};

pub use error::ServerError;
pub use router::create_router;
pub use state::AppState;

/// Where to listen and what to serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub addr: SocketAddr,
    pub site_dir: Option<PathBuf>,
}

/// Run the server until Ctrl-C.
pub async fn run(settings: ServerSettings, state: AppState) -> Result<(), ServerError> {
    let app = create_router(state, settings.site_dir.as_deref());

    let listener = TcpListener::bind(settings.addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: settings.addr,
            source,
        })?;

    let local = listener.local_addr().unwrap_or(settings.addr);
    info!("Listening on http://{}", local);
    if let Some(dir) = &settings.site_dir {
        info!(site_dir = %dir.display(), "Serving rendered site");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Could not listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutting down gracefully...");
}
