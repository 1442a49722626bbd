//! Complaint filing and tracking domain.
//!
//! Complaints are filed through the chat (drawer form or keyword replies)
//! and looked up by tracking ID against a [`ComplaintRepository`].

mod form;
mod model;
mod repository;

pub use form::{ComplaintDetails, ComplaintKind};
pub use model::{ComplaintRecord, ComplaintStatus, StatusUpdate};
pub use repository::ComplaintRepository;
