use serde::{Deserialize, Serialize};

use super::language::ChatLanguage;
use super::message::Message;

/// Visual weight of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeVariant {
    #[default]
    Default,
    Destructive,
}

/// A transient, toast-style notification for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        variant: NoticeVariant,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant,
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, NoticeVariant::Default)
    }
}

/// State changes published by the conversation driver.
///
/// A front end can rebuild its view from these alone; they are emitted in
/// the order the driver applied them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEvent {
    /// A message was appended to the history.
    MessageAppended { message: Message },
    /// The pending placeholder `removed_id` was replaced by `message`.
    MessageReplaced { removed_id: u64, message: Message },
    /// The typing/loading indicator changed.
    TypingChanged { typing: bool },
    LanguageChanged { language: ChatLanguage },
    /// An image was attached (`true`) or the attachment was cleared (`false`).
    AttachmentChanged { attached: bool },
    EcoPointsEarned { points: u32, total: u32 },
    Notice { notice: Notice },
    /// The history was reset to the greeting.
    Cleared,
}
