use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::form::ComplaintKind;
use crate::lexicon::TrackingId;

/// Lifecycle stage of a filed complaint.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display, EnumString,
)]
pub enum ComplaintStatus {
    Submitted,
    #[strum(serialize = "Under Review")]
    #[serde(rename = "Under Review")]
    UnderReview,
    Assigned,
    #[strum(serialize = "In Progress")]
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

/// One entry of a complaint's status history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub at: NaiveDateTime,
    pub status: ComplaintStatus,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintRecord {
    pub id: TrackingId,
    pub status: ComplaintStatus,
    pub kind: ComplaintKind,
    pub description: String,
    pub location: String,
    pub date_submitted: NaiveDate,
    pub last_updated: NaiveDate,
    pub estimated_completion: NaiveDate,
    /// Percent complete, 0..=100.
    pub progress: u8,
    /// Status history, oldest first.
    pub updates: Vec<StatusUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

impl ComplaintRecord {
    pub fn is_resolved(&self) -> bool {
        self.status == ComplaintStatus::Completed
    }

    pub fn latest_update(&self) -> Option<&StatusUpdate> {
        self.updates.last()
    }
}
