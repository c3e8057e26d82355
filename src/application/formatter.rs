//! # Line Formatter
//!
//! Turns one puzzle record into a `(title, body)` display line.

use crate::domain::types::{DisplayLine, PuzzleRecord};

pub const NO_DATA: &str = "*no data*";

#[derive(Debug, Clone)]
pub struct LineFormatter {
    sheet_url_template: String,
}

impl LineFormatter {
    /// `sheet_url_template` must contain `{id}`.
    pub fn new(sheet_url_template: impl Into<String>) -> Self {
        Self {
            sheet_url_template: sheet_url_template.into(),
        }
    }

    fn sheet_url(&self, record: &PuzzleRecord) -> String {
        self.sheet_url_template
            .replace("{id}", &record.id.to_string())
    }

    pub fn format(&self, record: &PuzzleRecord) -> DisplayLine {
        let mut title = String::new();
        if record.is_solved() {
            title.push_str(&format!("[{}] ", record.answer.as_deref().unwrap_or_default()));
        }
        title.push_str(&record.name);

        let mut body = String::new();
        if let Some(url) = &record.url {
            body.push_str(&format!("[Puzzle]({url}) "));
        }
        if record.sheet.is_some() {
            body.push_str(&format!("([sheet]({}))", self.sheet_url(record)));
        }
        if let Some(chat) = record.chat_url() {
            body.push_str(&format!("([chat]({chat}))"));
        }
        if body.is_empty() {
            body.push_str(NO_DATA);
        }

        DisplayLine { title, body }
    }

    pub fn format_all(&self, records: &[PuzzleRecord]) -> Vec<DisplayLine> {
        records.iter().map(|r| self.format(r)).collect()
    }
}
