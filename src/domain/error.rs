//! # Store Errors
//!
//! Failures surfaced by datastore clients. None of them are retried.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("datastore unavailable: {0}")]
    Unavailable(String),

    #[error("datastore returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("malformed datastore payload: {0}")]
    Decode(String),

    #[error("failed to read snapshot {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
