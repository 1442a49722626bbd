//! Error types for the Nagarsathi chat core.

use thiserror::Error;

use crate::chat::{Notice, NoticeVariant};

/// A shared error type for the whole workspace.
///
/// Variants are typed so that callers can decide whether a failure becomes a
/// user-visible notice (validation), a distinct UI state (not found), or a
/// log line (remote collaborators).
#[derive(Error, Debug, Clone)]
pub enum NagarError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Attachment is not an image
    #[error("Invalid file type: {mime}")]
    InvalidFileType { mime: String },

    /// Attachment exceeds the configured size limit
    #[error("File too large: {size} bytes (limit {limit})")]
    FileTooLarge { size: u64, limit: u64 },

    /// A required form field was left empty
    #[error("Missing information: {0}")]
    MissingField(String),

    /// Remote collaborator (HTTP endpoint) failure
    #[error("Remote call failed: {0}")]
    Remote(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl NagarError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Remote error
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error comes from input validation (file type, size, form fields).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidFileType { .. } | Self::FileTooLarge { .. } | Self::MissingField(_)
        )
    }

    /// Check if this is a remote collaborator failure
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    /// Converts the error into the notice a front end shows to the user.
    ///
    /// Validation errors get their own wording; everything else collapses into
    /// a generic destructive notice.
    pub fn to_notice(&self) -> Notice {
        match self {
            Self::InvalidFileType { .. } => Notice::new(
                "Invalid file type",
                "Please upload an image file (.jpg, .png, etc.)",
                NoticeVariant::Destructive,
            ),
            Self::FileTooLarge { limit, .. } => Notice::new(
                "File too large",
                format!(
                    "Please upload an image smaller than {}MB",
                    limit / (1024 * 1024)
                ),
                NoticeVariant::Destructive,
            ),
            Self::MissingField(description) => Notice::new(
                "Missing information",
                description.clone(),
                NoticeVariant::Destructive,
            ),
            Self::Remote(_) => Notice::new(
                "Error",
                "Something went wrong while filing the complaint.",
                NoticeVariant::Destructive,
            ),
            other => Notice::new("Error", other.to_string(), NoticeVariant::Destructive),
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for NagarError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for NagarError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for NagarError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for NagarError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<minijinja::Error> for NagarError {
    fn from(err: minijinja::Error) -> Self {
        Self::Internal(format!("template rendering failed: {}", err))
    }
}

/// Conversion from anyhow::Error (used at binary boundaries)
impl From<anyhow::Error> for NagarError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, NagarError>`.
pub type Result<T> = std::result::Result<T, NagarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_have_distinct_notices() {
        let bad_type = NagarError::InvalidFileType {
            mime: "application/pdf".to_string(),
        }
        .to_notice();
        let too_big = NagarError::FileTooLarge {
            size: 6 * 1024 * 1024,
            limit: 5 * 1024 * 1024,
        }
        .to_notice();

        assert_eq!(bad_type.title, "Invalid file type");
        assert_eq!(too_big.title, "File too large");
        assert_eq!(too_big.description, "Please upload an image smaller than 5MB");
        assert_eq!(bad_type.variant, NoticeVariant::Destructive);
    }

    #[test]
    fn test_type_checks() {
        assert!(NagarError::not_found("complaint", "GC-1").is_not_found());
        assert!(NagarError::MissingField("x".into()).is_validation());
        assert!(NagarError::remote("timeout").is_remote());
        assert!(!NagarError::internal("boom").is_validation());
    }
}
