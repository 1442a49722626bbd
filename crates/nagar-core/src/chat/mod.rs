//! Chat domain module.
//!
//! Contains the conversation data model shared by the driver and any
//! presentation layer: messages, the conversation state snapshot, the events
//! a driver publishes, and image attachments.
//!
//! # Module Structure
//!
//! - `language`: Chat language (`ChatLanguage`)
//! - `message`: Message types (`Message`, `MessageKind`, `Sender`, `MessageStatus`)
//! - `attachment`: Validated image attachments (`ImageAttachment`)
//! - `state`: Conversation state owned by the driver (`ConversationState`)
//! - `event`: Events published to front ends (`ChatEvent`, `Notice`)

mod attachment;
mod event;
mod language;
mod message;
mod state;

pub use attachment::{DEFAULT_MAX_ATTACHMENT_BYTES, ImageAttachment};
pub use event::{ChatEvent, Notice, NoticeVariant};
pub use language::ChatLanguage;
pub use message::{Message, MessageKind, MessageStatus, Sender};
pub use state::ConversationState;
