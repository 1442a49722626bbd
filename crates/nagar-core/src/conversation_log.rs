//! Best-effort persistence of completed chat exchanges.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::auth::Identity;
use crate::error::Result;

const DEFAULT_EMAIL: &str = "user@example.com";
const SUBJECT: &str = "Chatbot Conversation";

/// Row appended to the external conversation log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ConversationRecord {
    /// Builds the record for one user turn and the bot reply to it.
    pub fn from_exchange(identity: &Identity, user_text: &str, bot_text: &str) -> Self {
        Self {
            user_id: identity.user_id.clone(),
            name: identity.display_name().to_string(),
            email: identity
                .email
                .clone()
                .unwrap_or_else(|| DEFAULT_EMAIL.to_string()),
            subject: SUBJECT.to_string(),
            message: format!("User: {}\nBot: {}", user_text, bot_text),
        }
    }
}

/// Append-only sink for conversation records.
///
/// Callers treat failures as non-fatal: they are logged and otherwise
/// ignored, never retried.
#[async_trait]
pub trait ConversationLog: Send + Sync {
    async fn append(&self, record: &ConversationRecord) -> Result<()>;
}

/// Discards every record. Used when no log endpoint is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopConversationLog;

#[async_trait]
impl ConversationLog for NoopConversationLog {
    async fn append(&self, _record: &ConversationRecord) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_exchange() {
        let identity = Identity::new("u-42", Some("ravi@example.in".into()));
        let record = ConversationRecord::from_exchange(&identity, "water leakage", "Logged.");

        assert_eq!(record.user_id, "u-42");
        assert_eq!(record.name, "ravi");
        assert_eq!(record.email, "ravi@example.in");
        assert_eq!(record.subject, "Chatbot Conversation");
        assert_eq!(record.message, "User: water leakage\nBot: Logged.");
    }

    #[test]
    fn test_record_defaults_without_email() {
        let record = ConversationRecord::from_exchange(&Identity::new("u-1", None), "a", "b");
        assert_eq!(record.name, "User");
        assert_eq!(record.email, "user@example.com");
    }
}
