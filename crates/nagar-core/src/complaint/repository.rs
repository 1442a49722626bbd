//! Complaint repository trait.

use async_trait::async_trait;

use super::model::ComplaintRecord;
use crate::error::Result;
use crate::lexicon::TrackingId;

/// Read access to filed complaints.
#[async_trait]
pub trait ComplaintRepository: Send + Sync {
    /// Finds a complaint by its tracking ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ComplaintRecord))`: Complaint found
    /// - `Ok(None)`: No complaint with this ID
    /// - `Err(_)`: The lookup itself failed
    async fn find_by_id(&self, id: &TrackingId) -> Result<Option<ComplaintRecord>>;

    /// Lists every known complaint, most recently submitted first.
    async fn list_all(&self) -> Result<Vec<ComplaintRecord>>;
}
