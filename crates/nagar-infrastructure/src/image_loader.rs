//! Reads image files from disk into validated attachments.

use std::path::Path;

use nagar_core::chat::ImageAttachment;
use nagar_core::error::{NagarError, Result};

/// Infers the MIME type from a filename extension.
pub fn infer_mime_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string()
}

/// Loads `path` as an image attachment.
///
/// The MIME type and size are checked against file metadata before the
/// bytes are read, so an oversized or non-image file is rejected without
/// loading it.
pub async fn load_image(path: &Path, max_bytes: u64) -> Result<ImageAttachment> {
    let mime_type = infer_mime_type(path);
    let metadata = tokio::fs::metadata(path).await?;
    if !metadata.is_file() {
        return Err(NagarError::io(format!("{} is not a file", path.display())));
    }
    ImageAttachment::validate(&mime_type, metadata.len(), max_bytes)?;

    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    tracing::debug!(
        path = %path.display(),
        mime = %mime_type,
        size = bytes.len(),
        "Image loaded"
    );
    ImageAttachment::from_bytes(file_name, mime_type, bytes, max_bytes)
}
