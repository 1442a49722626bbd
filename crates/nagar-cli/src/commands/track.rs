use anyhow::{Result, bail};
use nagar_core::complaint::ComplaintRepository;
use nagar_core::lexicon::TrackingId;
use nagar_infrastructure::InMemoryComplaintRepository;

pub async fn run(input: &str, json: bool) -> Result<()> {
    let repository = InMemoryComplaintRepository::with_demo_data()?;
    let id = TrackingId::parse(input)?;

    let Some(record) = repository.find_by_id(&id).await? else {
        bail!("No complaint found with ID {}", id);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!("{}  {}  ({}%)", record.id, record.status, record.progress);
    println!("{} at {}", record.kind.display_name(), record.location);
    println!("{}", record.description);
    if let Some(assigned) = &record.assigned_to {
        println!("Assigned to {}", assigned);
    }
    for update in &record.updates {
        println!(
            "  {}  {}: {}",
            update.at.format("%Y-%m-%d %H:%M"),
            update.status,
            update.description
        );
    }
    Ok(())
}
