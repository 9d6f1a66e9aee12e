//! In-memory, append-only chat transcript.
//!
//! `InMemoryTranscript` keeps every message of one chat session in a `Vec`
//! protected by a `Mutex`. Clones share the same underlying log, so the chat
//! service and whoever renders the conversation can hold it at once.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use drai_contracts::error::{DrAiError, DrAiResult};

use crate::message::{group_by_date, Message, MessageGroup, Sender};

// ── Internal mutable state ────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub(crate) struct TranscriptState {
    /// All messages in append order. Never contains a typing indicator.
    pub(crate) messages: Vec<Message>,

    /// Whether the AI is currently "typing".
    pub(crate) typing: bool,
}

// ── Public transcript ─────────────────────────────────────────────────────────

/// The message log of a single chat session.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTranscript {
    pub(crate) state: Arc<Mutex<TranscriptState>>,
}

impl InMemoryTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> DrAiResult<MutexGuard<'_, TranscriptState>> {
        self.state.lock().map_err(|e| DrAiError::StateError {
            reason: format!("transcript lock poisoned: {}", e),
        })
    }

    /// Append a message. Typing indicators are not stored; pushing one turns
    /// the typing flag on instead.
    pub fn push(&self, message: Message) -> DrAiResult<()> {
        let mut state = self.lock()?;
        if message.is_typing {
            state.typing = true;
            return Ok(());
        }

        // A reply from the AI ends its typing state.
        if message.sender == Sender::Ai {
            state.typing = false;
        }

        debug!(
            message_id = %message.id,
            sender = ?message.sender,
            position = state.messages.len(),
            "message appended"
        );
        state.messages.push(message);
        Ok(())
    }

    /// Show or hide the typing indicator.
    pub fn set_typing(&self, typing: bool) -> DrAiResult<()> {
        self.lock()?.typing = typing;
        Ok(())
    }

    pub fn is_typing(&self) -> DrAiResult<bool> {
        Ok(self.lock()?.typing)
    }

    /// All stored messages in order, without the typing indicator.
    pub fn messages(&self) -> DrAiResult<Vec<Message>> {
        Ok(self.lock()?.messages.clone())
    }

    /// What the chat screen shows: stored messages followed by the typing
    /// indicator while the AI is typing.
    pub fn display(&self) -> DrAiResult<Vec<Message>> {
        let state = self.lock()?;
        let mut shown = state.messages.clone();
        if state.typing {
            shown.push(Message::typing());
        }
        Ok(shown)
    }

    /// Stored messages grouped by calendar date.
    pub fn groups(&self) -> DrAiResult<Vec<MessageGroup>> {
        Ok(group_by_date(&self.lock()?.messages))
    }

    /// The most recent message, if any.
    pub fn last(&self) -> DrAiResult<Option<Message>> {
        Ok(self.lock()?.messages.last().cloned())
    }

    pub fn len(&self) -> DrAiResult<usize> {
        Ok(self.lock()?.messages.len())
    }

    pub fn is_empty(&self) -> DrAiResult<bool> {
        Ok(self.lock()?.messages.is_empty())
    }
}
