//! Quick action domain models.
//!
//! Quick actions are the fixed shortcut buttons shown above the chat input.
//! Each one either prefills the input with a canned question or opens the
//! complaint drawer.

mod model;

pub use model::{QUICK_ACTIONS, QuickAction, QuickActionEffect};
