use std::path::Path;

use anyhow::{Context, Result};
use nagar_core::chat::{ChatLanguage, DEFAULT_MAX_ATTACHMENT_BYTES};
use nagar_core::waste::{analyze_payload, compose_analysis_reply};
use nagar_infrastructure::image_loader::load_image;

/// Classifies the image without the simulated latency.
pub async fn run(file: &Path, language: ChatLanguage, json: bool) -> Result<()> {
    let image = load_image(file, DEFAULT_MAX_ATTACHMENT_BYTES)
        .await
        .with_context(|| format!("Failed to load {}", file.display()))?;
    let analysis = analyze_payload(&image.payload);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}", compose_analysis_reply(&analysis, language));
    }
    Ok(())
}
