//! Image attachments accepted by the chat.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use serde::{Deserialize, Serialize};

use crate::error::{NagarError, Result};

/// Upper bound for attached images (5 MiB).
pub const DEFAULT_MAX_ATTACHMENT_BYTES: u64 = 5 * 1024 * 1024;

/// An image that passed validation and is ready to be classified.
///
/// `payload` is a `data:<mime>;base64,<bytes>` URL. The classifier hashes this
/// string, so two attachments with the same bytes and MIME type always
/// classify identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAttachment {
    /// Original file name, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// MIME type, always starting with `image/`.
    pub mime_type: String,
    /// Size of the raw image in bytes.
    pub size: u64,
    /// Base64 data URL of the image.
    pub payload: String,
    /// Raw bytes, kept for multipart uploads.
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl ImageAttachment {
    /// Validates raw image bytes and encodes them into a data URL.
    ///
    /// Type is checked before size, so a large non-image reports the type
    /// problem.
    ///
    /// # Errors
    ///
    /// - `NagarError::InvalidFileType` if `mime_type` does not start with `image/`
    /// - `NagarError::FileTooLarge` if the bytes exceed `max_bytes`
    pub fn from_bytes(
        file_name: Option<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
        max_bytes: u64,
    ) -> Result<Self> {
        let mime_type = mime_type.into();
        Self::validate(&mime_type, bytes.len() as u64, max_bytes)?;

        let payload = format!(
            "data:{};base64,{}",
            mime_type,
            BASE64_STANDARD.encode(&bytes)
        );

        Ok(Self {
            file_name,
            size: bytes.len() as u64,
            mime_type,
            payload,
            bytes,
        })
    }

    /// Checks MIME type and size without touching the bytes.
    pub fn validate(mime_type: &str, size: u64, max_bytes: u64) -> Result<()> {
        if !mime_type.starts_with("image/") {
            return Err(NagarError::InvalidFileType {
                mime: mime_type.to_string(),
            });
        }
        if size > max_bytes {
            return Err(NagarError::FileTooLarge {
                size,
                limit: max_bytes,
            });
        }
        Ok(())
    }
}
