//! # Packer
//!
//! Splits a response into pages the chat platform will accept. Lines are
//! sorted, never split and never dropped; a line too large for any page
//! gets a page of its own.

use crate::domain::types::{DisplayLine, Page};

/// Total rendered characters per page (title plus every field).
pub const MAX_PAGE_CHARS: usize = 6000;
/// Fields per page.
pub const MAX_PAGE_LINES: usize = 25;

/// Sort `lines` by `(title, body)` and pack them into pages titled `title`.
/// Always returns at least one page.
pub fn pack(title: &str, mut lines: Vec<DisplayLine>) -> Vec<Page> {
    lines.sort();

    let mut pages = Vec::new();
    let mut page = Page::new(title);
    let mut page_len = page.char_len();

    for line in lines {
        let line_len = line.char_len();
        let full = page.fields.len() >= MAX_PAGE_LINES || page_len + line_len >= MAX_PAGE_CHARS;
        if full && !page.fields.is_empty() {
            pages.push(std::mem::replace(&mut page, Page::new(title)));
            page_len = page.char_len();
        }
        page_len += line_len;
        page.fields.push(line);
    }
    pages.push(page);

    tracing::debug!("Packed '{}' into {} page(s)", title, pages.len());
    pages
}
