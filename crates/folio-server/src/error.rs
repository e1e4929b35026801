//! Server startup errors. Request failures never surface here; handlers
//! turn them into JSON replies.

use std::net::SocketAddr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server stopped with an error: {0}")]
    Serve(#[source] std::io::Error),
}
