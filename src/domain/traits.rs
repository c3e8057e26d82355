//! # Domain Traits
//!
//! Abstract interfaces for the chat connection and the puzzle datastore.
//! Allows for pluggable implementations in the Infrastructure layer.

use async_trait::async_trait;
use std::collections::HashSet;

use crate::domain::error::StoreError;
use crate::domain::types::{Page, PuzzleRecord, PuzzleStatus, Tag, TagId};

/// Abstract interface for a Chat Provider (e.g., Matrix, Console)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Render and send one page, returning the platform's message id.
    async fn send_page(&self, page: &Page) -> Result<String, String>;

    /// Get the current room ID
    fn room_id(&self) -> String;
}

/// Record selection understood by every store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleFilter {
    Statuses(HashSet<PuzzleStatus>),
    /// Puzzles carrying any of these tags.
    Tags(HashSet<TagId>),
}

impl PuzzleFilter {
    pub fn matches(&self, record: &PuzzleRecord) -> bool {
        match self {
            PuzzleFilter::Statuses(statuses) => statuses.contains(&record.status),
            PuzzleFilter::Tags(ids) => record.tags.iter().any(|id| ids.contains(id)),
        }
    }
}

/// Abstract interface for the puzzle tracking datastore
#[async_trait]
pub trait PuzzleStore: Send + Sync {
    /// Puzzles of `hunt` matching `filter`, chat room data included.
    async fn puzzles(
        &self,
        hunt: &str,
        filter: &PuzzleFilter,
    ) -> Result<Vec<PuzzleRecord>, StoreError>;

    /// Every tag known for `hunt`.
    async fn tags(&self, hunt: &str) -> Result<Vec<Tag>, StoreError>;
}
