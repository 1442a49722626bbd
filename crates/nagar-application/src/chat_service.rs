//! Chat use cases on top of the conversation driver.
//!
//! `ChatService` owns a [`ConversationDriver`] and the collaborators the
//! driver itself does not need: the remote upload analyzer, the complaint
//! repository and the config used to build them.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result as AnyResult};
use nagar_core::auth::AuthContext;
use nagar_core::chat::{ChatEvent, Notice};
use nagar_core::complaint::{ComplaintDetails, ComplaintRecord, ComplaintRepository};
use nagar_core::config::{ChatConfig, RootConfig};
use nagar_core::conversation_log::ConversationLog;
use nagar_core::error::{NagarError, Result};
use nagar_core::lexicon::TrackingId;
use nagar_core::lexicon::responses::IDENTIFY_PROMPT;
use nagar_core::quick_action::{QuickAction, QuickActionEffect};
use nagar_core::upload::{UploadAnalysis, UploadAnalyzer};
use nagar_infrastructure::image_loader::load_image;
use nagar_infrastructure::{HttpUploadAnalyzer, InMemoryComplaintRepository, RestConversationLog};
use nagar_interaction::{ChatContext, ConversationDriver, SubmitOutcome};
use tokio::sync::mpsc;

/// What happened after an image file was attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachOutcome {
    /// The upload endpoint analysed the image and its complaint was submitted.
    AutoFiled {
        analysis: UploadAnalysis,
        outcome: SubmitOutcome,
    },
    /// The upload endpoint failed; the image stays attached.
    UploadFailed,
    /// No upload endpoint; the image is attached and waits for a submit.
    Attached,
}

pub struct ChatService {
    driver: Arc<ConversationDriver>,
    upload_analyzer: Option<Arc<dyn UploadAnalyzer>>,
    complaints: Arc<dyn ComplaintRepository>,
}

impl ChatService {
    pub fn new(driver: Arc<ConversationDriver>, complaints: Arc<dyn ComplaintRepository>) -> Self {
        Self {
            driver,
            upload_analyzer: None,
            complaints,
        }
    }

    /// Routes attached images through a remote analyzer first.
    pub fn with_upload_analyzer(mut self, analyzer: Arc<dyn UploadAnalyzer>) -> Self {
        self.upload_analyzer = Some(analyzer);
        self
    }

    /// Wires a complete session from configuration.
    ///
    /// The REST conversation log and the upload analyzer are only used when
    /// their endpoints are configured. Complaint tracking uses the demo
    /// dataset.
    pub fn from_config(
        config: &RootConfig,
        auth: Arc<dyn AuthContext>,
    ) -> AnyResult<(Self, mpsc::UnboundedReceiver<ChatEvent>)> {
        let mut context = ChatContext::new(config.chat.clone()).with_auth(auth);
        if let Some(log) = RestConversationLog::from_config(&config.log) {
            tracing::info!(url = %log.insert_url(), "Conversation logging enabled");
            context = context.with_conversation_log(Arc::new(log) as Arc<dyn ConversationLog>);
        }

        let (driver, events) = ConversationDriver::new(context);
        let complaints = InMemoryComplaintRepository::with_demo_data()
            .context("Failed to build demo complaint data")?;

        let mut service = Self::new(Arc::new(driver), Arc::new(complaints));
        if let Some(analyzer) = HttpUploadAnalyzer::from_config(&config.upload) {
            tracing::info!(endpoint = %analyzer.endpoint(), "Upload analysis enabled");
            service = service.with_upload_analyzer(Arc::new(analyzer));
        }
        Ok((service, events))
    }

    pub fn driver(&self) -> &Arc<ConversationDriver> {
        &self.driver
    }

    pub fn config(&self) -> &ChatConfig {
        self.driver.config()
    }

    /// Loads an image file and attaches it.
    ///
    /// With an upload analyzer the image is analysed remotely, and the
    /// detected material becomes a complaint that is submitted after the
    /// auto-submit delay. Without one, an empty input is prefilled with the
    /// identification prompt.
    ///
    /// # Errors
    ///
    /// File and validation errors. Validation errors are also published as
    /// notices. A failed upload is not an error: it yields
    /// [`AttachOutcome::UploadFailed`] and a notice.
    pub async fn attach_file(&self, path: &Path) -> Result<AttachOutcome> {
        let image = match load_image(path, self.config().max_attachment_bytes).await {
            Ok(image) => image,
            Err(err) => {
                if err.is_validation() {
                    self.driver.notify(err.to_notice());
                }
                return Err(err);
            }
        };
        self.driver.attach_image(image.clone()).await?;

        let Some(analyzer) = &self.upload_analyzer else {
            if self.driver.snapshot().await.pending_input.trim().is_empty() {
                self.driver.set_input(IDENTIFY_PROMPT).await;
            }
            return Ok(AttachOutcome::Attached);
        };

        let analysis = match analyzer.analyze(&image).await {
            Ok(analysis) => analysis,
            Err(err) => {
                tracing::warn!(error = %err, path = %path.display(), "Image upload failed");
                self.driver.notify(NagarError::remote(err.to_string()).to_notice());
                return Ok(AttachOutcome::UploadFailed);
            }
        };

        self.driver.set_input(analysis.auto_complaint_text()).await;
        tokio::time::sleep(self.config().auto_submit_delay()).await;
        let outcome = self.driver.submit().await;
        self.driver.notify(Notice::info(
            "Complaint Filed ✅",
            format!("Waste type: {}. Complaint auto-filed.", analysis.material),
        ));
        Ok(AttachOutcome::AutoFiled { analysis, outcome })
    }

    /// Submits the complaint drawer, as a one-line message or a formal letter.
    ///
    /// The text is placed in the input and submitted after the auto-submit
    /// delay. Incomplete details are rejected with a notice before anything
    /// changes.
    pub async fn submit_complaint(
        &self,
        details: &ComplaintDetails,
        formal: bool,
    ) -> Result<SubmitOutcome> {
        let text = if formal {
            details.formal_letter()
        } else {
            details.short_text()
        };
        let text = match text {
            Ok(text) => text,
            Err(err) => {
                self.driver.notify(err.to_notice());
                return Err(err);
            }
        };

        self.driver.set_input(text).await;
        tokio::time::sleep(self.config().auto_submit_delay()).await;
        Ok(self.driver.submit().await)
    }

    /// Looks up a complaint by tracking ID.
    ///
    /// Input is trimmed and upper-cased. Malformed and unknown IDs both come
    /// back as `Ok(None)`.
    pub async fn track(&self, input: &str) -> Result<Option<ComplaintRecord>> {
        tokio::time::sleep(self.config().tracking_lookup_delay()).await;

        let id = match TrackingId::parse(input) {
            Ok(id) => id,
            Err(err) if err.is_not_found() => {
                tracing::debug!(input, "Malformed tracking ID");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        let record = self.complaints.find_by_id(&id).await?;
        tracing::debug!(tracking_id = %id, found = record.is_some(), "Complaint lookup");
        Ok(record)
    }

    /// Applies a quick action and returns its effect.
    ///
    /// `SetInput` actions fill the input. `OpenComplaintDrawer` is left to
    /// the front end.
    pub async fn quick_action(&self, id: &str) -> Result<QuickActionEffect> {
        let action =
            QuickAction::find(id).ok_or_else(|| NagarError::not_found("quick action", id))?;
        if let QuickActionEffect::SetInput(text) = action.effect {
            self.driver.set_input(text).await;
        }
        Ok(action.effect)
    }
}
