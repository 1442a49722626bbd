//! Runtime plumbing for the chat core: delayed turn tasks, tracing setup and
//! the diagnostics layer that surfaces background failures.

pub mod logging;
pub mod scheduler;
pub mod tracing_layer;

pub use scheduler::{TurnHandle, TurnScheduler};
pub use tracing_layer::{DiagnosticEvent, DiagnosticLayer};
