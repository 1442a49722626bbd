//! Conversation message types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::attachment::ImageAttachment;
use crate::waste::WasteAnalysisResult;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// Delivery status shown next to a bot message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Success,
    /// Placeholder for an in-flight waste analysis.
    Pending,
    Error,
}

/// What a message carries besides its text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MessageKind {
    /// Text only.
    Plain,
    /// A user message with an image attached.
    Attachment { image: ImageAttachment },
    /// A bot reply produced by the waste classifier.
    Analysis { analysis: WasteAnalysisResult },
}

/// A single message in the conversation history.
///
/// Messages are immutable once appended. The only permitted edit is the
/// replacement of a `Pending` placeholder by its resolved successor, which
/// the state performs by removal plus append.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique, monotonically assigned identifier.
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MessageStatus>,
    #[serde(flatten)]
    pub kind: MessageKind,
}

impl Message {
    /// Returns true for the in-flight analysis placeholder.
    pub fn is_pending(&self) -> bool {
        self.status == Some(MessageStatus::Pending)
    }

    pub fn is_from_bot(&self) -> bool {
        self.sender == Sender::Bot
    }

    /// The classifier result, for analysis replies.
    pub fn waste_analysis(&self) -> Option<&WasteAnalysisResult> {
        match &self.kind {
            MessageKind::Analysis { analysis } => Some(analysis),
            _ => None,
        }
    }

    /// The attached image, for user messages sent with one.
    pub fn attachment(&self) -> Option<&ImageAttachment> {
        match &self.kind {
            MessageKind::Attachment { image } => Some(image),
            _ => None,
        }
    }
}
