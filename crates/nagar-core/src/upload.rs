//! Remote image analysis used by the upload-and-complain flow.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::chat::ImageAttachment;
use crate::error::Result;

/// Response of the upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadAnalysis {
    pub material: String,
    pub complaint_text: String,
}

impl UploadAnalysis {
    /// Chat input generated from the analysis, auto-submitted by the front end.
    pub fn auto_complaint_text(&self) -> String {
        format!(
            "📸 Detected: {}\n📝 Complaint: {}",
            self.material, self.complaint_text
        )
    }
}

/// Sends an image to a remote service that drafts a complaint for it.
#[async_trait]
pub trait UploadAnalyzer: Send + Sync {
    async fn analyze(&self, image: &ImageAttachment) -> Result<UploadAnalysis>;
}
