//! # HTTP Puzzle Store
//!
//! Reads puzzles and tags from the tracker's JSON API. One request per query:
//! each puzzle payload already embeds its chat room and tags, and filtering
//! happens locally after decoding.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::error::StoreError;
use crate::domain::traits::{PuzzleFilter, PuzzleStore};
use crate::domain::types::{ChatRoom, PuzzleRecord, PuzzleStatus, Tag};

/// Puzzle as served by `GET {base}/hunts/{hunt}/puzzles`.
#[derive(Debug, Deserialize)]
struct ApiPuzzle {
    id: u64,
    name: String,
    status: PuzzleStatus,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default, alias = "sheet_id")]
    sheet: Option<String>,
    #[serde(default)]
    chat_room: Option<ChatRoom>,
    #[serde(default)]
    tags: Vec<Tag>,
}

impl ApiPuzzle {
    fn into_record(self, hunt: &str) -> PuzzleRecord {
        PuzzleRecord {
            id: self.id,
            hunt: hunt.to_string(),
            name: self.name,
            status: self.status,
            // The API reports missing values as empty strings.
            answer: self.answer.filter(|a| !a.is_empty()),
            url: self.url.filter(|u| !u.is_empty()),
            sheet: self.sheet.filter(|s| !s.is_empty()),
            chat_room: self.chat_room,
            tags: self.tags.into_iter().map(|t| t.id).collect(),
        }
    }
}

pub struct HttpStore {
    client: Client,
    base_url: String,
    api_token: Option<String>,
}

impl HttpStore {
    pub fn new(
        base_url: &str,
        api_token: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
        })
    }

    fn endpoint(&self, hunt: &str, resource: &str) -> String {
        format!("{}/hunts/{}/{}", self.base_url, hunt, resource)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, StoreError> {
        let mut request = self.client.get(url);
        if let Some(token) = &self.api_token {
            request = request.header(reqwest::header::AUTHORIZATION, format!("Token {token}"));
        }

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| StoreError::Decode(e.to_string()))
    }
}

/// Decode a puzzle listing and keep what `filter` selects.
fn select(body: Vec<ApiPuzzle>, hunt: &str, filter: &PuzzleFilter) -> Vec<PuzzleRecord> {
    body.into_iter()
        .map(|p| p.into_record(hunt))
        .filter(|r| filter.matches(r))
        .collect()
}

#[async_trait]
impl PuzzleStore for HttpStore {
    async fn puzzles(
        &self,
        hunt: &str,
        filter: &PuzzleFilter,
    ) -> Result<Vec<PuzzleRecord>, StoreError> {
        let url = self.endpoint(hunt, "puzzles");
        tracing::debug!("Fetching puzzles from {}", url);
        let body: Vec<ApiPuzzle> = self.get_json(&url).await?;
        Ok(select(body, hunt, filter))
    }

    async fn tags(&self, hunt: &str) -> Result<Vec<Tag>, StoreError> {
        let url = self.endpoint(hunt, "tags");
        tracing::debug!("Fetching tags from {}", url);
        self.get_json(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"[
        {"id": 1, "name": "Crossword", "status": "SOLVING", "answer": "",
         "url": "https://hunt.example/crossword", "sheet": "abc",
         "chat_room": {"text_channel_url": "https://chat.example/1"},
         "tags": [{"id": 7, "name": "meta"}]},
        {"id": 2, "name": "Fruit Puzzle", "status": "SOLVED", "answer": "APPLE",
         "url": "", "chat_room": null, "tags": []},
        {"id": 3, "name": "Cipher", "status": "EXTRACTION",
         "tags": [{"id": 7, "name": "meta"}, {"id": 8, "name": "word play"}]}
    ]"#;

    fn payload() -> Vec<ApiPuzzle> {
        serde_json::from_str(PAYLOAD).unwrap()
    }

    #[test]
    fn test_decode_normalizes_empty_strings() {
        let records = select(
            payload(),
            "5",
            &PuzzleFilter::Statuses([
                PuzzleStatus::Solving,
                PuzzleStatus::Solved,
                PuzzleStatus::Extraction,
            ]
            .into_iter()
            .collect()),
        );
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].answer, None);
        assert_eq!(records[0].sheet.as_deref(), Some("abc"));
        assert_eq!(records[0].hunt, "5");
        assert_eq!(records[1].url, None);
        assert_eq!(records[1].answer.as_deref(), Some("APPLE"));
        assert_eq!(records[2].tags, vec![7, 8]);
    }

    #[test]
    fn test_select_by_status() {
        let filter = PuzzleFilter::Statuses([PuzzleStatus::Solved].into_iter().collect());
        let records = select(payload(), "5", &filter);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Fruit Puzzle");
    }

    #[test]
    fn test_select_by_tag() {
        let filter = PuzzleFilter::Tags([7].into_iter().collect());
        let names: Vec<_> = select(payload(), "5", &filter)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Crossword", "Cipher"]);
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let store = HttpStore::new("https://tracker.example/api/v1/", None, 5).unwrap();
        assert_eq!(
            store.endpoint("9", "tags"),
            "https://tracker.example/api/v1/hunts/9/tags"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_unavailable() {
        let store = HttpStore::new("http://127.0.0.1:9", None, 2).unwrap();
        let err = store.tags("1").await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }
}
