//! # Matrix Service Adapter
//!
//! Implements the `ChatProvider` trait for the Matrix protocol using the `matrix_sdk`.
//! Pages are rendered as a single markdown message each.

use crate::domain::traits::ChatProvider;
use crate::domain::types::Page;
use async_trait::async_trait;
use matrix_sdk::room::Room;
use matrix_sdk::ruma::events::room::message::RoomMessageEventContent;

#[derive(Clone)]
pub struct MatrixService {
    room: Room,
}

impl MatrixService {
    pub fn new(room: Room) -> Self {
        Self { room }
    }
}

/// Bold title, optional description, then one bullet per field.
pub fn render_markdown(page: &Page) -> String {
    let mut blocks = Vec::new();
    if !page.title.is_empty() {
        blocks.push(format!("**{}**", page.title));
    }
    if let Some(description) = &page.description {
        blocks.push(description.clone());
    }
    if !page.fields.is_empty() {
        let fields: Vec<_> = page
            .fields
            .iter()
            .map(|f| format!("* **{}**: {}", f.title, f.body))
            .collect();
        blocks.push(fields.join("\n"));
    }
    if blocks.is_empty() {
        // Matrix rejects empty bodies.
        blocks.push("*nothing to show*".to_string());
    }
    blocks.join("\n\n")
}

#[async_trait]
impl ChatProvider for MatrixService {
    fn room_id(&self) -> String {
        self.room.room_id().as_str().to_string()
    }

    async fn send_page(&self, page: &Page) -> Result<String, String> {
        tracing::debug!(
            "Bot sending page '{}' ({} fields) to {}",
            page.title,
            page.fields.len(),
            self.room_id()
        );
        self.room
            .send(RoomMessageEventContent::text_markdown(render_markdown(page)))
            .await
            .map(|resp| resp.event_id.to_string())
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_listing() {
        let page = Page::new("Solved puzzles")
            .with_field("[APPLE] Fruit Puzzle", "[Puzzle](https://hunt.example/fruit) ")
            .with_field("Maze", "*no data*");
        assert_eq!(
            render_markdown(&page),
            "**Solved puzzles**\n\n\
             * **[APPLE] Fruit Puzzle**: [Puzzle](https://hunt.example/fruit) \n\
             * **Maze**: *no data*"
        );
    }

    #[test]
    fn test_render_untitled_with_description() {
        let page = Page::new("")
            .with_description("usage")
            .with_field("Puzzle Tags", "meta");
        assert_eq!(render_markdown(&page), "usage\n\n* **Puzzle Tags**: meta");
    }

    #[test]
    fn test_render_empty_listing_keeps_title() {
        assert_eq!(render_markdown(&Page::new("Stuck puzzles")), "**Stuck puzzles**");
    }
}
