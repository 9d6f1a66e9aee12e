//! Chat message types and constructors.
//!
//! Timestamps are stored and rendered in UTC.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Id shared by every typing indicator; at most one is shown at a time.
pub const TYPING_INDICATOR_ID: &str = "typing-indicator";

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

/// One entry in the chat transcript.
///
/// Regular messages carry text and a timestamp. A typing indicator carries
/// neither and has `is_typing` set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub text: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    /// `HH:MM` rendering of `timestamp`.
    pub formatted_time: Option<String>,
    #[serde(default)]
    pub is_typing: bool,
}

impl Message {
    /// A message typed by the user, stamped now.
    pub fn user(text: impl Into<String>) -> Self {
        Self::text_at(Sender::User, text, Utc::now())
    }

    /// A reply from the AI doctor, stamped now.
    pub fn ai(text: impl Into<String>) -> Self {
        Self::text_at(Sender::Ai, text, Utc::now())
    }

    /// A text message with an explicit timestamp.
    pub fn text_at(sender: Sender, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: new_message_id(),
            sender,
            text: Some(text.into()),
            timestamp: Some(timestamp),
            formatted_time: Some(format_time(&timestamp)),
            is_typing: false,
        }
    }

    /// The "AI is typing" placeholder.
    pub fn typing() -> Self {
        Self {
            id: TYPING_INDICATOR_ID.to_string(),
            sender: Sender::Ai,
            text: None,
            timestamp: None,
            formatted_time: None,
            is_typing: true,
        }
    }
}

/// Generate a unique message id.
pub fn new_message_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Render a timestamp as `HH:MM`.
pub fn format_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%H:%M").to_string()
}

/// Messages that share a calendar date, under a date header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageGroup {
    pub date: NaiveDate,
    pub messages: Vec<Message>,
}

/// Split messages into runs of consecutive messages sharing a date.
///
/// Messages without a timestamp (typing indicators) are skipped. A date that
/// reappears after a different date starts a new group.
pub fn group_by_date(messages: &[Message]) -> Vec<MessageGroup> {
    let mut groups: Vec<MessageGroup> = Vec::new();

    for message in messages {
        let Some(timestamp) = message.timestamp else {
            continue;
        };
        let date = timestamp.date_naive();

        match groups.last_mut() {
            Some(group) if group.date == date => group.messages.push(message.clone()),
            _ => groups.push(MessageGroup {
                date,
                messages: vec![message.clone()],
            }),
        }
    }

    groups
}
