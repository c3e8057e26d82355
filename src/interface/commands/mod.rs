//! # Command Handlers
//!
//! Contains specific handler functions for each supported command (unsolved, solved, stuck, tagged, help).
//! These handlers are invoked by the Router.

pub mod help;
pub mod puzzles;
pub mod tagged;

use anyhow::Result;

use crate::domain::traits::ChatProvider;
use crate::domain::types::Page;

/// Send pages one after another; stops at the first failure.
pub async fn send_pages(chat: &impl ChatProvider, pages: &[Page]) -> Result<()> {
    for (index, page) in pages.iter().enumerate() {
        chat.send_page(page).await.map_err(|e| {
            anyhow::anyhow!("sending page {}/{} failed: {}", index + 1, pages.len(), e)
        })?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::domain::error::StoreError;
    use crate::domain::traits::{ChatProvider, PuzzleFilter, PuzzleStore};
    use crate::domain::types::{Page, PuzzleRecord, Tag};

    /// Chat double that records every page; optionally fails after `fail_after` sends.
    #[derive(Default)]
    pub(crate) struct RecordingChat {
        pub pages: Mutex<Vec<Page>>,
        pub fail_after: Option<usize>,
    }

    impl RecordingChat {
        pub fn failing_after(sent: usize) -> Self {
            Self {
                pages: Mutex::default(),
                fail_after: Some(sent),
            }
        }

        pub fn sent(&self) -> Vec<Page> {
            self.pages.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatProvider for RecordingChat {
        async fn send_page(&self, page: &Page) -> Result<String, String> {
            let mut pages = self.pages.lock().unwrap();
            if self.fail_after.is_some_and(|n| pages.len() >= n) {
                return Err("connection reset".to_string());
            }
            pages.push(page.clone());
            Ok(format!("$event{}", pages.len()))
        }

        fn room_id(&self) -> String {
            "!room:example.org".to_string()
        }
    }

    /// Store that is always down.
    pub(crate) struct DownStore;

    #[async_trait]
    impl PuzzleStore for DownStore {
        async fn puzzles(
            &self,
            _hunt: &str,
            _filter: &PuzzleFilter,
        ) -> Result<Vec<PuzzleRecord>, StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }

        async fn tags(&self, _hunt: &str) -> Result<Vec<Tag>, StoreError> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingChat;
    use super::*;

    #[tokio::test]
    async fn test_send_pages_in_order() {
        let chat = RecordingChat::default();
        let pages = vec![Page::new("one"), Page::new("two"), Page::new("three")];
        send_pages(&chat, &pages).await.unwrap();
        assert_eq!(chat.sent(), pages);
    }

    #[tokio::test]
    async fn test_send_pages_stops_on_failure() {
        let chat = RecordingChat::failing_after(1);
        let pages = vec![Page::new("one"), Page::new("two"), Page::new("three")];
        let err = send_pages(&chat, &pages).await.unwrap_err();
        assert!(err.to_string().contains("page 2/3"));
        assert_eq!(chat.sent(), vec![Page::new("one")]);
    }
}
