//! Mocked chat service for AI doctor consultations.
//!
//! Replies come from a `Responder` (keyword matching by default) and every
//! exchange is recorded in the session transcript.

use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::info;

use drai_chat::{InMemoryTranscript, Message};
use drai_contracts::{
    error::DrAiResult,
    response::{quick_questions, WELCOME_MESSAGE},
};
use drai_core::traits::Responder;
use drai_keywords::TomlKeywordEngine;

use crate::mock_data::DEMO_PHRASES;

/// One chat session: a responder plus the transcript it writes to.
pub struct ChatService {
    responder: Box<dyn Responder>,
    transcript: InMemoryTranscript,
}

impl ChatService {
    pub fn new(responder: Box<dyn Responder>) -> Self {
        Self {
            responder,
            transcript: InMemoryTranscript::new(),
        }
    }

    /// A session answering from the embedded keyword table.
    pub fn with_default_rules() -> DrAiResult<Self> {
        Ok(Self::new(Box::new(TomlKeywordEngine::with_default_rules()?)))
    }

    /// The session transcript. Clones share the same log.
    pub fn transcript(&self) -> &InMemoryTranscript {
        &self.transcript
    }

    /// Post the greeting that opens every session.
    pub fn welcome(&self) -> DrAiResult<()> {
        self.transcript.push(Message::ai(WELCOME_MESSAGE))
    }

    /// Answer a typed or dictated message.
    pub fn ask(&self, text: &str) -> DrAiResult<&'static str> {
        let reply = self.responder.respond(text);
        self.exchange(text, reply)?;
        info!(chars = text.chars().count(), "chat message answered");
        Ok(reply)
    }

    /// Answer a quick-question button. The question's text is recorded as the
    /// user's message; an unknown id is recorded verbatim.
    pub fn ask_quick(&self, question_id: &str) -> DrAiResult<&'static str> {
        let reply = self.responder.respond_quick(question_id);
        let text = quick_questions()
            .into_iter()
            .find(|q| q.id == question_id)
            .map(|q| q.text)
            .unwrap_or_else(|| question_id.to_string());

        self.exchange(&text, reply)?;
        info!(question_id = %question_id, "quick question answered");
        Ok(reply)
    }

    fn exchange(&self, text: &str, reply: &str) -> DrAiResult<()> {
        self.transcript.push(Message::user(text))?;
        self.transcript.set_typing(true)?;
        self.transcript.push(Message::ai(reply))
    }
}

/// Mocked speech recognition: hands out the demo phrases in rotation.
#[derive(Debug, Default)]
pub struct SpeechTranscriber {
    next: AtomicUsize,
}

impl SpeechTranscriber {
    pub fn new() -> Self {
        Self::default()
    }

    /// "Transcribe" the latest recording.
    pub fn transcribe(&self) -> &'static str {
        let index = self.next.fetch_add(1, Ordering::Relaxed) % DEMO_PHRASES.len();
        DEMO_PHRASES[index]
    }
}

#[cfg(test)]
mod tests {
    use drai_chat::Sender;
    use drai_contracts::response::{ResponseCategory, WELCOME_MESSAGE};

    use super::{ChatService, SpeechTranscriber};
    use crate::mock_data::DEMO_PHRASES;

    fn service() -> ChatService {
        ChatService::with_default_rules().expect("default rules must parse")
    }

    #[test]
    fn welcome_opens_the_transcript() {
        let chat = service();
        chat.welcome().unwrap();

        let messages = chat.transcript().messages().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, Sender::Ai);
        assert_eq!(messages[0].text.as_deref(), Some(WELCOME_MESSAGE));
    }

    #[test]
    fn ask_records_both_sides() {
        let chat = service();
        let reply = chat.ask("من سردرد دارم").unwrap();
        assert_eq!(reply, ResponseCategory::Headache.reply());

        let messages = chat.transcript().messages().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, Sender::User);
        assert_eq!(messages[0].text.as_deref(), Some("من سردرد دارم"));
        assert_eq!(messages[1].sender, Sender::Ai);
        assert_eq!(messages[1].text.as_deref(), Some(reply));
        assert!(!chat.transcript().is_typing().unwrap());
    }

    #[test]
    fn unmatched_text_gets_unknown_reply() {
        let chat = service();
        assert_eq!(chat.ask("unrelated text").unwrap(), ResponseCategory::Unknown.reply());
        assert_eq!(chat.ask("").unwrap(), ResponseCategory::Unknown.reply());
    }

    #[test]
    fn quick_question_records_its_text() {
        let chat = service();
        assert_eq!(chat.ask_quick("q2").unwrap(), ResponseCategory::ColdSymptoms.reply());

        let first = &chat.transcript().messages().unwrap()[0];
        assert_eq!(first.text.as_deref(), Some("علائم سرماخوردگی"));
    }

    #[test]
    fn unknown_quick_question() {
        let chat = service();
        assert_eq!(chat.ask_quick("q5").unwrap(), ResponseCategory::Unknown.reply());

        let first = &chat.transcript().messages().unwrap()[0];
        assert_eq!(first.text.as_deref(), Some("q5"));
    }

    #[test]
    fn transcribed_phrases_rotate_and_dispatch() {
        let chat = service();
        let speech = SpeechTranscriber::new();

        let heard: Vec<&str> = (0..5).map(|_| speech.transcribe()).collect();
        assert_eq!(&heard[..4], &DEMO_PHRASES[..]);
        assert_eq!(heard[4], DEMO_PHRASES[0]);

        let expected = [
            ResponseCategory::Headache,
            ResponseCategory::ColdSymptoms,
            ResponseCategory::Medicine,
            ResponseCategory::DoctorVisit,
        ];
        for (phrase, category) in DEMO_PHRASES.iter().zip(expected) {
            assert_eq!(chat.ask(phrase).unwrap(), category.reply(), "phrase: {phrase}");
        }
    }
}
