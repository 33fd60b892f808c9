//! Conversation history for one agent instance

use crate::llm::provider::{Message, MessageRole};

/// Ordered, in-memory message history.
///
/// Grows by a user/assistant pair per completed turn and is only ever emptied as a whole.
/// `has_system_framing` records whether the conversation has already been framed by a
/// system prompt, so the default framing is sent at most once per session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    messages: Vec<Message>,
    has_system_framing: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message to the tail
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Record a completed turn. Both halves land together and mark the session framed.
    pub fn record_turn(&mut self, user: impl Into<String>, assistant: impl Into<String>) {
        self.messages.reserve(2);
        self.messages.push(Message::user(user));
        self.messages.push(Message::assistant(assistant));
        self.has_system_framing = true;
    }

    /// Full history in chronological order
    pub fn snapshot(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of completed user turns
    pub fn turn_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.role == MessageRole::User)
            .count()
    }

    pub fn has_system_framing(&self) -> bool {
        self.has_system_framing
    }

    /// Empty the history and forget any framing
    pub fn clear(&mut self) {
        self.messages.clear();
        self.has_system_framing = false;
    }
}
