//! The seam between the chat service and whatever chooses its replies.
//!
//! The chat service never matches keywords itself; it asks a `Responder`.
//! The reference implementation is the TOML keyword engine in
//! `drai-keywords`, but any deterministic classifier can stand in.

use drai_contracts::response::ResponseCategory;

/// Maps user input to one of the fixed reply categories.
///
/// Implementations must be total: every input, including the empty string,
/// resolves to a category (`Unknown` when nothing matches). They must also be
/// free of hidden state, so the same input always yields the same category.
pub trait Responder: Send + Sync {
    /// Classify free-text input typed or dictated by the user.
    fn classify(&self, text: &str) -> ResponseCategory;

    /// Classify a quick-question button by its identifier (`q1`, `q2`, ...).
    ///
    /// This is a direct lookup; no keyword matching is involved.
    fn classify_quick(&self, question_id: &str) -> ResponseCategory;

    /// The reply text for free-text input.
    fn respond(&self, text: &str) -> &'static str {
        self.classify(text).reply()
    }

    /// The reply text for a quick question.
    fn respond_quick(&self, question_id: &str) -> &'static str {
        self.classify_quick(question_id).reply()
    }
}
