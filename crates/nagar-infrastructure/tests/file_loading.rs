use std::fs;

use nagar_core::NagarError;
use nagar_core::chat::{ChatLanguage, DEFAULT_MAX_ATTACHMENT_BYTES};
use nagar_infrastructure::ConfigService;
use nagar_infrastructure::image_loader::load_image;
use tempfile::TempDir;

#[test]
fn test_missing_config_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let service = ConfigService::with_path(dir.path().join("config.toml"));

    let config = service.get_config();
    assert_eq!(config.chat.response_delay_ms, 1500);
    assert_eq!(config.chat.default_language, ChatLanguage::English);
}

#[test]
fn test_config_file_is_read_and_cached() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[chat]\nresponse_delay_ms = 5\ndefault_language = \"hindi\"\n",
    )
    .unwrap();

    let service = ConfigService::with_path(&path);
    assert_eq!(service.get_config().chat.response_delay_ms, 5);

    // Cached until invalidated.
    fs::write(&path, "[chat]\nresponse_delay_ms = 7\n").unwrap();
    assert_eq!(service.get_config().chat.response_delay_ms, 5);

    service.invalidate_cache();
    let reloaded = service.get_config();
    assert_eq!(reloaded.chat.response_delay_ms, 7);
    assert_eq!(reloaded.chat.default_language, ChatLanguage::English);
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[chat\nresponse_delay_ms = ").unwrap();

    let config = ConfigService::with_path(&path).get_config();
    assert_eq!(config.chat.response_delay_ms, 1500);
}

#[tokio::test]
async fn test_load_png() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bottle.png");
    fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

    let image = load_image(&path, DEFAULT_MAX_ATTACHMENT_BYTES).await.unwrap();
    assert_eq!(image.mime_type, "image/png");
    assert_eq!(image.file_name.as_deref(), Some("bottle.png"));
    assert_eq!(image.payload, "data:image/png;base64,iVBORw==");
}

#[tokio::test]
async fn test_load_rejects_non_image() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "not an image").unwrap();

    let err = load_image(&path, DEFAULT_MAX_ATTACHMENT_BYTES)
        .await
        .unwrap_err();
    assert!(matches!(err, NagarError::InvalidFileType { .. }));
}

#[tokio::test]
async fn test_load_rejects_oversized_image() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("big.jpg");
    fs::write(&path, vec![0u8; 2048]).unwrap();

    let err = load_image(&path, 1024).await.unwrap_err();
    assert!(matches!(
        err,
        NagarError::FileTooLarge {
            size: 2048,
            limit: 1024
        }
    ));
}

#[tokio::test]
async fn test_load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_image(&dir.path().join("gone.png"), 1024)
        .await
        .unwrap_err();
    assert!(matches!(err, NagarError::Io { .. }));
}
