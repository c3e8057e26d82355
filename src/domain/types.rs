//! # Domain Types
//!
//! Puzzle records as the datastore hands them out, plus the request-scoped
//! display structures built from them while answering one message.

use serde::{Deserialize, Serialize};

pub type PuzzleId = u64;
pub type TagId = u64;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PuzzleStatus {
    Solving,
    Pending,
    Solved,
    Stuck,
    Extraction,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRoom {
    #[serde(default)]
    pub text_channel_url: Option<String>,
}

/// Read-only projection of a puzzle for the duration of one request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PuzzleRecord {
    pub id: PuzzleId,
    /// Hunt the puzzle belongs to.
    #[serde(default)]
    pub hunt: String,
    pub name: String,
    pub status: PuzzleStatus,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub sheet: Option<String>,
    #[serde(default)]
    pub chat_room: Option<ChatRoom>,
    #[serde(default)]
    pub tags: Vec<TagId>,
}

impl PuzzleRecord {
    pub fn is_solved(&self) -> bool {
        self.status == PuzzleStatus::Solved
    }

    /// Chat link, if the room exists and actually has one.
    pub fn chat_url(&self) -> Option<&str> {
        self.chat_room
            .as_ref()
            .and_then(|room| room.text_channel_url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
}

/// One rendered field: `(title, body)`. Ordering is lexicographic on the pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DisplayLine {
    pub title: String,
    pub body: String,
}

impl DisplayLine {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Characters this line contributes to a page.
    pub fn char_len(&self) -> usize {
        self.title.chars().count() + self.body.chars().count()
    }
}

/// One outbound message unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub description: Option<String>,
    pub fields: Vec<DisplayLine>,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(DisplayLine::new(name, value));
        self
    }

    /// Title, description and every field name/value, in characters.
    pub fn char_len(&self) -> usize {
        self.title.chars().count()
            + self
                .description
                .as_deref()
                .map_or(0, |d| d.chars().count())
            + self.fields.iter().map(DisplayLine::char_len).sum::<usize>()
    }
}

/// A chat message as delivered by the connection shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub sender: String,
    pub channel: String,
    pub body: String,
}

impl InboundMessage {
    pub fn new(
        sender: impl Into<String>,
        channel: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            channel: channel.into(),
            body: body.into(),
        }
    }
}

/// Known commands. Anything else resolves to `Help`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Unsolved,
    Solved,
    Stuck,
    Tagged,
    Help,
}

impl CommandKind {
    /// Lookup table, in the order help lists them.
    pub const TABLE: [(&'static str, CommandKind); 4] = [
        ("unsolved", CommandKind::Unsolved),
        ("solved", CommandKind::Solved),
        ("stuck", CommandKind::Stuck),
        ("tagged", CommandKind::Tagged),
    ];

    pub fn from_name(name: &str) -> Self {
        Self::TABLE
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, kind)| *kind)
            .unwrap_or(CommandKind::Help)
    }
}

/// Parsed form of one prefixed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: Option<String>,
    pub args: Vec<String>,
}

impl Command {
    /// Split on whitespace. The first token is the prefix, the second the
    /// command name (leading `!` stripped), the rest are arguments.
    pub fn parse(text: &str) -> Self {
        let mut tokens = text.split_whitespace().skip(1);
        let name = tokens.next().map(|t| t.trim_start_matches('!').to_string());
        Self {
            name,
            args: tokens.map(str::to_string).collect(),
        }
    }

    pub fn kind(&self) -> CommandKind {
        self.name
            .as_deref()
            .map_or(CommandKind::Help, CommandKind::from_name)
    }
}
