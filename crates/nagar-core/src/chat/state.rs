//! Conversation state owned by the driver.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::attachment::ImageAttachment;
use super::language::ChatLanguage;
use super::message::{Message, MessageKind, MessageStatus, Sender};
use crate::lexicon;

/// Everything a single chat session remembers.
///
/// Only the conversation driver mutates this. History is append-only except
/// for [`ConversationState::replace_pending`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationState {
    pub messages: Vec<Message>,
    pub current_language: ChatLanguage,
    pub pending_input: String,
    pub is_awaiting_response: bool,
    pub attached_image: Option<ImageAttachment>,
    pub eco_points: u32,
    #[serde(skip)]
    next_id: u64,
}

impl ConversationState {
    /// Creates a state holding only the greeting for `language`.
    pub fn new(language: ChatLanguage) -> Self {
        let mut state = Self {
            messages: Vec::new(),
            current_language: language,
            pending_input: String::new(),
            is_awaiting_response: false,
            attached_image: None,
            eco_points: 0,
            next_id: 1,
        };
        state.append(
            Sender::Bot,
            lexicon::greeting(language),
            None,
            MessageKind::Plain,
        );
        state
    }

    /// Appends a message, assigning the next id and a timestamp that never
    /// goes backwards relative to the previous message.
    pub fn append(
        &mut self,
        sender: Sender,
        text: impl Into<String>,
        status: Option<MessageStatus>,
        kind: MessageKind,
    ) -> Message {
        let message = Message {
            id: self.next_id,
            text: text.into(),
            sender,
            timestamp: self.next_timestamp(),
            status,
            kind,
        };
        self.next_id += 1;
        self.messages.push(message.clone());
        message
    }

    /// Removes the pending placeholder `pending_id` and appends its successor.
    ///
    /// Returns `None` (and appends nothing) if that placeholder is no longer
    /// in the history, e.g. because the conversation was cleared meanwhile.
    pub fn replace_pending(
        &mut self,
        pending_id: u64,
        text: impl Into<String>,
        status: Option<MessageStatus>,
        kind: MessageKind,
    ) -> Option<Message> {
        let position = self
            .messages
            .iter()
            .position(|m| m.id == pending_id && m.is_pending())?;
        self.messages.remove(position);
        Some(self.append(Sender::Bot, text, status, kind))
    }

    /// Number of pending placeholders in the history.
    pub fn pending_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_pending()).count()
    }

    pub fn has_pending(&self) -> bool {
        self.pending_count() > 0
    }

    /// Takes the attached image, leaving none.
    pub fn take_attachment(&mut self) -> Option<ImageAttachment> {
        self.attached_image.take()
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    fn next_timestamp(&self) -> DateTime<Utc> {
        let now = Utc::now();
        match self.messages.last() {
            Some(last) if last.timestamp > now => last.timestamp,
            _ => now,
        }
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new(ChatLanguage::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_has_greeting() {
        let state = ConversationState::new(ChatLanguage::English);
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].id, 1);
        assert!(state.messages[0].text.contains("Nagarsathi"));
        assert!(!state.is_awaiting_response);
    }

    #[test]
    fn test_ids_and_timestamps_are_monotonic() {
        let mut state = ConversationState::default();
        for i in 0..20 {
            state.append(Sender::User, format!("m{}", i), None, MessageKind::Plain);
        }
        for pair in state.messages.windows(2) {
            assert!(pair[0].id < pair[1].id);
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }

    #[test]
    fn test_replace_pending_removes_placeholder() {
        let mut state = ConversationState::default();
        let pending = state.append(
            Sender::Bot,
            "Analyzing...",
            Some(MessageStatus::Pending),
            MessageKind::Plain,
        );
        assert_eq!(state.pending_count(), 1);

        let resolved = state
            .replace_pending(pending.id, "done", None, MessageKind::Plain)
            .unwrap();

        assert_eq!(state.pending_count(), 0);
        assert!(resolved.id > pending.id);
        assert!(state.messages.iter().all(|m| m.id != pending.id));
    }

    #[test]
    fn test_replace_missing_pending_is_noop() {
        let mut state = ConversationState::default();
        let before = state.messages.len();
        assert!(
            state
                .replace_pending(42, "late", None, MessageKind::Plain)
                .is_none()
        );
        assert_eq!(state.messages.len(), before);
    }
}
