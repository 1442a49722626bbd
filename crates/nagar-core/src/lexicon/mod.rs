//! Static reply tables and the turn routing rules.
//!
//! # Module Structure
//!
//! - `responses`: Canned bot texts per language and the keyword reply tables
//! - `rules`: Ordered rule table deciding how a user turn is answered
//! - `tracking_id`: Cosmetic complaint tracking identifiers

pub mod responses;
pub mod rules;
pub mod tracking_id;

pub use responses::{KeywordReply, greeting};
pub use rules::{Route, Rule, TurnInput, route};
pub use tracking_id::TrackingId;
