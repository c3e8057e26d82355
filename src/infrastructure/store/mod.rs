//! # Datastore Clients
//!
//! Implementations of `PuzzleStore`: a JSON HTTP client for the live tracker and
//! an in-memory store (optionally loaded from a YAML snapshot).

pub mod http;
pub mod memory;

use anyhow::Result;
use std::sync::Arc;

use crate::domain::config::StoreConfig;
use crate::domain::traits::PuzzleStore;

/// Build the store selected in the configuration.
pub fn from_config(config: &StoreConfig) -> Result<Arc<dyn PuzzleStore>> {
    let store: Arc<dyn PuzzleStore> = match config {
        StoreConfig::Http {
            base_url,
            api_token,
            timeout_secs,
            ..
        } => Arc::new(http::HttpStore::new(
            base_url,
            api_token.clone(),
            *timeout_secs,
        )?),
        StoreConfig::File { path } => Arc::new(memory::MemoryStore::load(path)?),
    };
    Ok(store)
}
