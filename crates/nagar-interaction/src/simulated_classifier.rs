//! Classifier that fakes a remote inference call.

use std::time::Duration;

use async_trait::async_trait;
use nagar_core::error::Result;
use nagar_core::waste::{WasteAnalysisResult, WasteClassifier, analyze_payload};

/// Waits for a fixed latency, then answers with the deterministic hash
/// analysis of the payload.
#[derive(Debug, Clone)]
pub struct SimulatedClassifier {
    latency: Duration,
}

impl SimulatedClassifier {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// No latency at all.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait]
impl WasteClassifier for SimulatedClassifier {
    async fn classify(&self, payload: &str) -> Result<WasteAnalysisResult> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let result = analyze_payload(payload);
        tracing::debug!(
            category = %result.category,
            confidence = result.confidence,
            payload_len = payload.len(),
            "Simulated classification finished"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nagar_core::waste::WasteCategory;

    #[tokio::test(start_paused = true)]
    async fn test_classify_waits_for_latency() {
        let classifier = SimulatedClassifier::new(Duration::from_millis(2000));
        let start = tokio::time::Instant::now();

        let result = classifier.classify("banana peel").await.unwrap();

        assert_eq!(result.category, WasteCategory::Solid);
        assert!(start.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test]
    async fn test_matches_pure_analysis() {
        let payload = "data:image/png;base64,iVBORw0KGgo=";
        let result = SimulatedClassifier::instant().classify(payload).await.unwrap();
        assert_eq!(result, analyze_payload(payload));
    }
}
