//! Infrastructure layer: everything that touches the file system or the network.
//!
//! - [`ConfigService`]: cached `config.toml` loading with environment overrides
//! - [`NagarPaths`]: platform config directory resolution
//! - [`RestConversationLog`]: conversation records posted to a REST insert endpoint
//! - [`HttpUploadAnalyzer`]: multipart image upload to the analysis endpoint
//! - [`image_loader`]: reading image files into validated attachments
//! - [`InMemoryComplaintRepository`]: the demo complaint dataset

pub mod config_service;
pub mod demo_complaint_repository;
pub mod http_upload_analyzer;
pub mod image_loader;
pub mod paths;
pub mod rest_conversation_log;

pub use config_service::ConfigService;
pub use demo_complaint_repository::InMemoryComplaintRepository;
pub use http_upload_analyzer::HttpUploadAnalyzer;
pub use paths::{NagarPaths, PathError};
pub use rest_conversation_log::RestConversationLog;
