//! Configuration model.
//!
//! Every field has a default, so an empty `config.toml` is a valid config.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::chat::{ChatLanguage, DEFAULT_MAX_ATTACHMENT_BYTES};

/// Timings and limits of the conversation driver.
///
/// The delays simulate remote latency; they are tunable, only their relative
/// order matters to the front end.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ChatConfig {
    pub response_delay_ms: u64,
    pub classification_delay_ms: u64,
    pub gamification_delay_ms: u64,
    pub status_update_delay_ms: u64,
    pub language_switch_delay_ms: u64,
    pub tracking_lookup_delay_ms: u64,
    pub auto_submit_delay_ms: u64,
    pub max_attachment_bytes: u64,
    pub default_language: ChatLanguage,
    /// Cancel the delayed follow-ups of earlier turns when a new turn starts.
    pub cancel_superseded_followups: bool,
    pub eco_points_per_identification: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: 1500,
            classification_delay_ms: 2000,
            gamification_delay_ms: 3000,
            status_update_delay_ms: 8000,
            language_switch_delay_ms: 1500,
            tracking_lookup_delay_ms: 500,
            auto_submit_delay_ms: 300,
            max_attachment_bytes: DEFAULT_MAX_ATTACHMENT_BYTES,
            default_language: ChatLanguage::English,
            cancel_superseded_followups: false,
            eco_points_per_identification: 5,
        }
    }
}

impl ChatConfig {
    /// All delays set to zero. Handy for tests and scripted runs.
    pub fn instant() -> Self {
        Self {
            response_delay_ms: 0,
            classification_delay_ms: 0,
            gamification_delay_ms: 0,
            status_update_delay_ms: 0,
            language_switch_delay_ms: 0,
            tracking_lookup_delay_ms: 0,
            auto_submit_delay_ms: 0,
            ..Self::default()
        }
    }

    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }

    pub fn classification_delay(&self) -> Duration {
        Duration::from_millis(self.classification_delay_ms)
    }

    pub fn gamification_delay(&self) -> Duration {
        Duration::from_millis(self.gamification_delay_ms)
    }

    pub fn status_update_delay(&self) -> Duration {
        Duration::from_millis(self.status_update_delay_ms)
    }

    pub fn language_switch_delay(&self) -> Duration {
        Duration::from_millis(self.language_switch_delay_ms)
    }

    pub fn tracking_lookup_delay(&self) -> Duration {
        Duration::from_millis(self.tracking_lookup_delay_ms)
    }

    pub fn auto_submit_delay(&self) -> Duration {
        Duration::from_millis(self.auto_submit_delay_ms)
    }
}

/// REST endpoint receiving conversation records.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// Base URL of the hosted database; logging is disabled when unset.
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub table: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            table: "contact_submissions".to_string(),
        }
    }
}

impl LogConfig {
    pub fn is_enabled(&self) -> bool {
        self.endpoint.as_deref().is_some_and(|e| !e.is_empty())
    }
}

/// Remote image analysis endpoint.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct UploadConfig {
    /// Full URL of the `upload_image` endpoint; disabled when unset.
    pub endpoint: Option<String>,
}

impl UploadConfig {
    pub fn is_enabled(&self) -> bool {
        self.endpoint.as_deref().is_some_and(|e| !e.is_empty())
    }
}

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RootConfig {
    pub chat: ChatConfig,
    pub log: LogConfig,
    pub upload: UploadConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config: RootConfig = toml::from_str("").unwrap();
        assert_eq!(config, RootConfig::default());
        assert_eq!(config.chat.status_update_delay(), Duration::from_secs(8));
        assert_eq!(config.chat.max_attachment_bytes, 5 * 1024 * 1024);
        assert!(!config.log.is_enabled());
    }

    #[test]
    fn test_partial_toml() {
        let config: RootConfig = toml::from_str(
            r#"
            [chat]
            response_delay_ms = 10
            default_language = "hindi"

            [upload]
            endpoint = "http://localhost:5000/upload_image"
            "#,
        )
        .unwrap();

        assert_eq!(config.chat.response_delay_ms, 10);
        assert_eq!(config.chat.classification_delay_ms, 2000);
        assert_eq!(config.chat.default_language, ChatLanguage::Hindi);
        assert!(config.upload.is_enabled());
        assert_eq!(config.log.table, "contact_submissions");
    }

    #[test]
    fn test_instant_keeps_limits() {
        let config = ChatConfig::instant();
        assert_eq!(config.gamification_delay(), Duration::ZERO);
        assert_eq!(config.eco_points_per_identification, 5);
    }
}
