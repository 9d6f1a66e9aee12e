//! # drai-chat
//!
//! Chat messages and the in-memory transcript behind the AI doctor chat.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use drai_chat::{InMemoryTranscript, Message};
//!
//! let transcript = InMemoryTranscript::new();
//! transcript.push(Message::user("من سردرد دارم"))?;
//! transcript.set_typing(true)?;
//! transcript.push(Message::ai("..."))?;
//!
//! let groups = transcript.groups()?;
//! ```

pub mod message;
pub mod transcript;

pub use message::{group_by_date, Message, MessageGroup, Sender, TYPING_INDICATOR_ID};
pub use transcript::InMemoryTranscript;

// ── Tests ─────────────────────────────────────────────────────────────────────
