//! In-memory complaint repository seeded with the demo complaints shown on
//! the tracking page.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use nagar_core::complaint::{
    ComplaintKind, ComplaintRecord, ComplaintRepository, ComplaintStatus, StatusUpdate,
};
use nagar_core::error::{NagarError, Result};
use nagar_core::lexicon::TrackingId;

#[derive(Debug, Clone, Default)]
pub struct InMemoryComplaintRepository {
    records: HashMap<TrackingId, ComplaintRecord>,
}

impl InMemoryComplaintRepository {
    pub fn new(records: impl IntoIterator<Item = ComplaintRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|record| (record.id.clone(), record))
                .collect(),
        }
    }

    /// The three demo complaints: one completed, one in progress, one assigned.
    pub fn with_demo_data() -> Result<Self> {
        Ok(Self::new(demo_records()?))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl ComplaintRepository for InMemoryComplaintRepository {
    async fn find_by_id(&self, id: &TrackingId) -> Result<Option<ComplaintRecord>> {
        Ok(self.records.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<ComplaintRecord>> {
        let mut records: Vec<_> = self.records.values().cloned().collect();
        records.sort_by(|a, b| b.date_submitted.cmp(&a.date_submitted));
        Ok(records)
    }
}

fn date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| NagarError::internal(format!("bad demo date {}: {}", value, e)))
}

fn update(at: &str, status: ComplaintStatus, description: &str) -> Result<StatusUpdate> {
    let at = NaiveDateTime::parse_from_str(at, "%Y-%m-%d %H:%M")
        .map_err(|e| NagarError::internal(format!("bad demo timestamp {}: {}", at, e)))?;
    Ok(StatusUpdate {
        at,
        status,
        description: description.to_string(),
    })
}

fn demo_records() -> Result<Vec<ComplaintRecord>> {
    use ComplaintStatus::*;

    Ok(vec![
        ComplaintRecord {
            id: TrackingId::parse("GC-2023-4512")?,
            status: Completed,
            kind: ComplaintKind::Garbage,
            description: "Overflowing garbage bin at street corner causing foul smell".into(),
            location: "Civil Lines, Near Hanuman Mandir".into(),
            date_submitted: date("2023-10-15")?,
            last_updated: date("2023-10-17")?,
            estimated_completion: date("2023-10-17")?,
            progress: 100,
            updates: vec![
                update("2023-10-15 09:30", Submitted, "Complaint received and registered")?,
                update("2023-10-15 11:45", UnderReview, "Complaint verified and prioritized")?,
                update("2023-10-16 08:15", Assigned, "Assigned to Sanitation Team A")?,
                update("2023-10-16 14:20", InProgress, "Team dispatched to location")?,
                update("2023-10-17 10:05", Completed, "Garbage collected and area cleaned")?,
            ],
            assigned_to: Some("Sanitation Department".into()),
        },
        ComplaintRecord {
            id: TrackingId::parse("WS-2023-1827")?,
            status: InProgress,
            kind: ComplaintKind::Water,
            description: "No water supply for the past 2 days".into(),
            location: "Katra, Shivkuti Colony".into(),
            date_submitted: date("2023-10-14")?,
            last_updated: date("2023-10-16")?,
            estimated_completion: date("2023-10-18")?,
            progress: 60,
            updates: vec![
                update("2023-10-14 14:22", Submitted, "Complaint received and registered")?,
                update("2023-10-15 09:10", UnderReview, "Issue identified as main pipeline blockage")?,
                update("2023-10-15 16:30", Assigned, "Assigned to Water Works Team B")?,
                update("2023-10-16 11:15", InProgress, "Repair work started on main pipeline")?,
            ],
            assigned_to: Some("Water Department".into()),
        },
        ComplaintRecord {
            id: TrackingId::parse("RM-2023-7235")?,
            status: Assigned,
            kind: ComplaintKind::Road,
            description: "Large pothole causing traffic issues and risk to vehicles".into(),
            location: "Daraganj, Near Sangam".into(),
            date_submitted: date("2023-10-13")?,
            last_updated: date("2023-10-15")?,
            estimated_completion: date("2023-10-20")?,
            progress: 30,
            updates: vec![
                update("2023-10-13 16:45", Submitted, "Complaint received and registered")?,
                update("2023-10-14 11:30", UnderReview, "Site inspection scheduled")?,
                update("2023-10-15 14:20", Assigned, "Assigned to Road Maintenance Team C")?,
            ],
            assigned_to: Some("Public Works Department".into()),
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_lookup() {
        let repo = InMemoryComplaintRepository::with_demo_data().unwrap();
        assert_eq!(repo.len(), 3);

        let id = TrackingId::parse("ws-2023-1827").unwrap();
        let record = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(record.status, ComplaintStatus::InProgress);
        assert_eq!(record.progress, 60);
        assert_eq!(record.updates.len(), 4);
        assert_eq!(
            record.latest_update().unwrap().description,
            "Repair work started on main pipeline"
        );
        assert!(!record.is_resolved());
    }

    #[tokio::test]
    async fn test_unknown_id_is_none() {
        let repo = InMemoryComplaintRepository::with_demo_data().unwrap();
        let id = TrackingId::parse("GC-2024-0001").unwrap();
        assert!(repo.find_by_id(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_newest_first() {
        let repo = InMemoryComplaintRepository::with_demo_data().unwrap();
        let ids: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id.to_string())
            .collect();
        assert_eq!(ids, ["GC-2023-4512", "WS-2023-1827", "RM-2023-7235"]);
    }
}
