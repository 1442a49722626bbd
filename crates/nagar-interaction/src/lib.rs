//! The stateful chat core.
//!
//! [`ConversationDriver`] owns one chat session: it routes each submitted
//! turn, schedules the delayed bot replies and publishes every state change
//! as a [`nagar_core::chat::ChatEvent`].

mod context;
mod driver;
pub mod simulated_classifier;

pub use context::ChatContext;
pub use driver::{ConversationDriver, SubmitOutcome};
pub use simulated_classifier::SimulatedClassifier;
