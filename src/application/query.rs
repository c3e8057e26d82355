//! # Query Layer
//!
//! Translates logical requests ("unsolved puzzles", "puzzles tagged X") into
//! datastore calls scoped to the active hunt. Pure retrieval, no formatting.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::error::StoreError;
use crate::domain::traits::{PuzzleFilter, PuzzleStore};
use crate::domain::types::{PuzzleRecord, PuzzleStatus, Tag};

/// Named status groups queried together.
pub const UNSOLVED: &[PuzzleStatus] = &[PuzzleStatus::Solving, PuzzleStatus::Pending];
pub const SOLVED: &[PuzzleStatus] = &[PuzzleStatus::Solved];
pub const STUCK: &[PuzzleStatus] = &[PuzzleStatus::Stuck, PuzzleStatus::Extraction];

#[derive(Clone)]
pub struct PuzzleQuery {
    store: Arc<dyn PuzzleStore>,
    hunt: String,
}

impl PuzzleQuery {
    pub fn new(store: Arc<dyn PuzzleStore>, hunt: impl Into<String>) -> Self {
        Self {
            store,
            hunt: hunt.into(),
        }
    }

    pub async fn fetch_by_status_group(
        &self,
        statuses: &[PuzzleStatus],
    ) -> Result<Vec<PuzzleRecord>, StoreError> {
        let filter = PuzzleFilter::Statuses(statuses.iter().copied().collect());
        self.store.puzzles(&self.hunt, &filter).await
    }

    /// Unknown names match nothing.
    pub async fn fetch_by_tags(&self, names: &[String]) -> Result<Vec<PuzzleRecord>, StoreError> {
        let wanted: HashSet<&str> = names.iter().map(String::as_str).collect();
        let matched: HashSet<_> = self
            .list_all_tags()
            .await?
            .into_iter()
            .filter(|tag| wanted.contains(tag.name.as_str()))
            .map(|tag| tag.id)
            .collect();

        if matched.is_empty() {
            tracing::debug!("No known tags among {:?}", names);
            return Ok(Vec::new());
        }

        self.store
            .puzzles(&self.hunt, &PuzzleFilter::Tags(matched))
            .await
    }

    pub async fn list_all_tags(&self) -> Result<Vec<Tag>, StoreError> {
        self.store.tags(&self.hunt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::store::memory::MemoryStore;
    use crate::infrastructure::store::memory::tests::{puzzle, sample_store};

    fn names(records: &[PuzzleRecord]) -> Vec<&str> {
        let mut names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn test_status_groups() {
        let query = PuzzleQuery::new(Arc::new(sample_store()), "1");

        let unsolved = query.fetch_by_status_group(UNSOLVED).await.unwrap();
        assert_eq!(names(&unsolved), vec!["Crossword", "Maze"]);

        let solved = query.fetch_by_status_group(SOLVED).await.unwrap();
        assert_eq!(names(&solved), vec!["Fruit Puzzle"]);

        let stuck = query.fetch_by_status_group(STUCK).await.unwrap();
        assert_eq!(names(&stuck), vec!["Cipher", "Logic Grid"]);
    }

    #[tokio::test]
    async fn test_hunt_scoping() {
        let query = PuzzleQuery::new(Arc::new(sample_store()), "2");
        let unsolved = query.fetch_by_status_group(UNSOLVED).await.unwrap();
        assert_eq!(names(&unsolved), vec!["Other Hunt"]);
    }

    #[tokio::test]
    async fn test_fetch_by_tags_any_match_without_duplicates() {
        let query = PuzzleQuery::new(Arc::new(sample_store()), "1");
        let records = query
            .fetch_by_tags(&["meta".to_string(), "word play".to_string()])
            .await
            .unwrap();
        assert_eq!(names(&records), vec!["Crossword", "Fruit Puzzle"]);
    }

    #[tokio::test]
    async fn test_unknown_tag_matches_nothing() {
        let query = PuzzleQuery::new(Arc::new(sample_store()), "1");
        let records = query.fetch_by_tags(&["nonexistent".to_string()]).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_list_all_tags() {
        let store = MemoryStore::new(
            vec![puzzle(1, "1", "A", PuzzleStatus::Solving)],
            vec![
                Tag { id: 1, name: "meta".into() },
                Tag { id: 2, name: "word play".into() },
            ],
        );
        let query = PuzzleQuery::new(Arc::new(store), "1");
        let tags = query.list_all_tags().await.unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[1].name, "word play");
    }
}
