//! Application layer for Nagarsathi.
//!
//! Use cases that coordinate the conversation driver with infrastructure:
//! attaching image files (optionally through the remote upload endpoint),
//! submitting the complaint drawer, complaint tracking and quick actions.

pub mod chat_service;

pub use chat_service::{AttachOutcome, ChatService};
