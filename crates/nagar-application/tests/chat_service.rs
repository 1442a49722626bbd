use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use nagar_application::{AttachOutcome, ChatService};
use nagar_core::NagarError;
use nagar_core::chat::{ChatEvent, ImageAttachment, Notice, NoticeVariant, Sender};
use nagar_core::complaint::{ComplaintDetails, ComplaintKind, ComplaintStatus};
use nagar_core::config::ChatConfig;
use nagar_core::error::Result;
use nagar_core::lexicon::responses::IDENTIFY_PROMPT;
use nagar_core::quick_action::QuickActionEffect;
use nagar_core::upload::{UploadAnalysis, UploadAnalyzer};
use nagar_infrastructure::InMemoryComplaintRepository;
use nagar_interaction::{ChatContext, ConversationDriver, SubmitOutcome};
use tempfile::TempDir;
use tokio::sync::mpsc::UnboundedReceiver;

const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 9, 9];

// Mock UploadAnalyzer for testing
struct MockUploadAnalyzer {
    response: Option<UploadAnalysis>,
    seen: Mutex<Vec<String>>,
}

impl MockUploadAnalyzer {
    fn answering(material: &str, complaint_text: &str) -> Self {
        Self {
            response: Some(UploadAnalysis {
                material: material.to_string(),
                complaint_text: complaint_text.to_string(),
            }),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            response: None,
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl UploadAnalyzer for MockUploadAnalyzer {
    async fn analyze(&self, image: &ImageAttachment) -> Result<UploadAnalysis> {
        self.seen.lock().unwrap().push(image.mime_type.clone());
        self.response
            .clone()
            .ok_or_else(|| NagarError::remote("connection refused"))
    }
}

fn service() -> (ChatService, UnboundedReceiver<ChatEvent>) {
    let (driver, events) = ConversationDriver::new(ChatContext::new(ChatConfig::instant()));
    let complaints = InMemoryComplaintRepository::with_demo_data().unwrap();
    (
        ChatService::new(Arc::new(driver), Arc::new(complaints)),
        events,
    )
}

fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

fn notices(events: &mut UnboundedReceiver<ChatEvent>) -> Vec<Notice> {
    let mut notices = Vec::new();
    while let Ok(event) = events.try_recv() {
        if let ChatEvent::Notice { notice } = event {
            notices.push(notice);
        }
    }
    notices
}

#[tokio::test]
async fn test_attach_without_upload_prefills_prompt() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "heap.png", PNG);
    let (service, _events) = service();

    let outcome = service.attach_file(&path).await.unwrap();
    assert_eq!(outcome, AttachOutcome::Attached);

    let state = service.driver().snapshot().await;
    assert_eq!(state.pending_input, IDENTIFY_PROMPT);
    assert_eq!(
        state.attached_image.unwrap().file_name.as_deref(),
        Some("heap.png")
    );
}

#[tokio::test]
async fn test_attach_keeps_typed_input() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "heap.png", PNG);
    let (service, _events) = service();
    service.driver().set_input("what is this?").await;

    service.attach_file(&path).await.unwrap();
    assert_eq!(
        service.driver().snapshot().await.pending_input,
        "what is this?"
    );
}

#[tokio::test]
async fn test_attach_rejects_non_image_with_notice() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "report.pdf", b"%PDF-1.4");
    let (service, mut events) = service();

    let err = service.attach_file(&path).await.unwrap_err();
    assert!(matches!(err, NagarError::InvalidFileType { .. }));

    let notices = notices(&mut events);
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title, "Invalid file type");
    assert!(service.driver().snapshot().await.attached_image.is_none());
}

#[tokio::test]
async fn test_upload_success_auto_files_complaint() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "ghat.png", PNG);
    let (service, mut events) = service();
    let analyzer = Arc::new(MockUploadAnalyzer::answering(
        "plastic bottle",
        "Plastic dumped near the ghat.",
    ));
    let service = service.with_upload_analyzer(analyzer.clone());

    let outcome = service.attach_file(&path).await.unwrap();
    let AttachOutcome::AutoFiled { analysis, outcome: submitted } = outcome else {
        panic!("expected an auto-filed complaint");
    };
    assert_eq!(analysis.material, "plastic bottle");
    assert!(matches!(submitted, SubmitOutcome::Dispatched { .. }));
    assert_eq!(*analyzer.seen.lock().unwrap(), ["image/png"]);

    service.driver().wait_idle().await;
    let state = service.driver().snapshot().await;
    let user = state
        .messages
        .iter()
        .find(|m| m.sender == Sender::User)
        .unwrap();
    assert_eq!(
        user.text,
        "📸 Detected: plastic bottle\n📝 Complaint: Plastic dumped near the ghat."
    );
    assert!(user.attachment().is_some());
    assert!(state.attached_image.is_none());

    let titles: Vec<String> = notices(&mut events).into_iter().map(|n| n.title).collect();
    assert!(titles.contains(&"Complaint Filed ✅".to_string()));
}

#[tokio::test]
async fn test_upload_failure_keeps_image_and_notifies() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "ghat.jpg", PNG);
    let (service, mut events) = service();
    let service = service.with_upload_analyzer(Arc::new(MockUploadAnalyzer::failing()));

    let outcome = service.attach_file(&path).await.unwrap();
    assert_eq!(outcome, AttachOutcome::UploadFailed);

    let state = service.driver().snapshot().await;
    assert!(state.attached_image.is_some());
    assert_eq!(state.messages.len(), 1);

    let failure = notices(&mut events)
        .into_iter()
        .find(|n| n.variant == NoticeVariant::Destructive)
        .unwrap();
    assert_eq!(
        failure.description,
        "Something went wrong while filing the complaint."
    );
}

#[tokio::test]
async fn test_submit_short_complaint() {
    let (service, _events) = service();
    let details = ComplaintDetails::new(
        ComplaintKind::Water,
        "Katra",
        "No water supply since Monday.",
    );

    let outcome = service.submit_complaint(&details, false).await.unwrap();
    assert!(matches!(outcome, SubmitOutcome::Dispatched { route: "keyword", .. }));

    service.driver().wait_idle().await;
    let state = service.driver().snapshot().await;
    assert_eq!(
        state.messages[1].text,
        "I want to report a water issue at Katra. No water supply since Monday."
    );
    assert!(
        state
            .messages
            .iter()
            .any(|m| m.sender == Sender::Bot && m.text.contains("#WS-"))
    );
}

#[tokio::test]
async fn test_formal_letter_requires_kind_and_location() {
    let (service, mut events) = service();
    let details = ComplaintDetails {
        kind: None,
        location: "Daraganj".into(),
        description: String::new(),
    };

    let err = service.submit_complaint(&details, true).await.unwrap_err();
    assert!(matches!(err, NagarError::MissingField(_)));
    assert_eq!(service.driver().snapshot().await.messages.len(), 1);
    assert_eq!(notices(&mut events)[0].title, "Missing information");
}

#[tokio::test]
async fn test_formal_letter_is_submitted() {
    let (service, _events) = service();
    let details = ComplaintDetails::new(ComplaintKind::Road, "Daraganj, Near Sangam", "");

    service.submit_complaint(&details, true).await.unwrap();
    let state = service.driver().snapshot().await;
    assert!(state.messages[1].text.contains("Subject: Complaint regarding"));
    assert!(state.messages[1].text.contains("Daraganj, Near Sangam"));
}

#[tokio::test(start_paused = true)]
async fn test_track_demo_complaints() {
    let (service, _events) = service();

    let record = service.track("  gc-2023-4512 ").await.unwrap().unwrap();
    assert_eq!(record.status, ComplaintStatus::Completed);
    assert_eq!(record.progress, 100);
    assert_eq!(record.assigned_to.as_deref(), Some("Sanitation Department"));

    let record = service.track("RM-2023-7235").await.unwrap().unwrap();
    assert_eq!(record.status, ComplaintStatus::Assigned);

    assert!(service.track("GC-2024-9999").await.unwrap().is_none());
    assert!(service.track("not an id").await.unwrap().is_none());
}

#[tokio::test]
async fn test_quick_actions() {
    let (service, _events) = service();

    let effect = service.quick_action("pay_tax").await.unwrap();
    assert_eq!(
        effect,
        QuickActionEffect::SetInput("How do I pay property tax?")
    );
    assert_eq!(
        service.driver().snapshot().await.pending_input,
        "How do I pay property tax?"
    );

    assert_eq!(
        service.quick_action("file_complaint").await.unwrap(),
        QuickActionEffect::OpenComplaintDrawer
    );
    assert!(service.quick_action("nope").await.unwrap_err().is_not_found());
}
