//! Domain core of the Nagarsathi municipal assistant.
//!
//! Everything here is either pure logic (routing rules, the hash-based waste
//! classifier, reply composition) or a trait describing a collaborator the
//! conversation driver talks to.

pub mod auth;
pub mod chat;
pub mod complaint;
pub mod config;
pub mod conversation_log;
pub mod error;
pub mod lexicon;
pub mod quick_action;
pub mod upload;
pub mod waste;

// Re-export common error type
pub use error::NagarError;
