//! In-memory puzzle store.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;

use crate::domain::error::StoreError;
use crate::domain::traits::{PuzzleFilter, PuzzleStore};
use crate::domain::types::{PuzzleRecord, Tag};

/// Snapshot file layout.
#[derive(Debug, Default, Deserialize)]
struct Snapshot {
    #[serde(default)]
    puzzles: Vec<PuzzleRecord>,
    #[serde(default)]
    tags: Vec<Tag>,
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    puzzles: Vec<PuzzleRecord>,
    tags: Vec<Tag>,
}

impl MemoryStore {
    pub fn new(puzzles: Vec<PuzzleRecord>, tags: Vec<Tag>) -> Self {
        Self { puzzles, tags }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let snapshot: Snapshot =
            serde_yaml::from_str(&content).map_err(|e| StoreError::Decode(e.to_string()))?;
        tracing::info!(
            "Loaded snapshot {}: {} puzzles, {} tags",
            path.display(),
            snapshot.puzzles.len(),
            snapshot.tags.len()
        );
        Ok(Self::new(snapshot.puzzles, snapshot.tags))
    }
}

#[async_trait]
impl PuzzleStore for MemoryStore {
    async fn puzzles(
        &self,
        hunt: &str,
        filter: &PuzzleFilter,
    ) -> Result<Vec<PuzzleRecord>, StoreError> {
        Ok(self
            .puzzles
            .iter()
            .filter(|p| p.hunt == hunt && filter.matches(p))
            .cloned()
            .collect())
    }

    async fn tags(&self, _hunt: &str) -> Result<Vec<Tag>, StoreError> {
        Ok(self.tags.clone())
    }
}
