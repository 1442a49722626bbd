//! Conversation log backed by a hosted database's REST insert endpoint.

use std::time::Duration;

use async_trait::async_trait;
use nagar_core::config::LogConfig;
use nagar_core::conversation_log::{ConversationLog, ConversationRecord};
use nagar_core::error::{NagarError, Result};
use reqwest::Client;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Posts each [`ConversationRecord`] as a JSON row to
/// `{endpoint}/rest/v1/{table}`.
#[derive(Clone)]
pub struct RestConversationLog {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    table: String,
}

impl RestConversationLog {
    /// Creates a log with explicit configuration.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key,
            table: table.into(),
        }
    }

    /// Builds a log from config, or `None` when no endpoint is configured.
    pub fn from_config(config: &LogConfig) -> Option<Self> {
        if !config.is_enabled() {
            tracing::debug!("[RestConversationLog] No endpoint configured, logging disabled");
            return None;
        }
        let endpoint = config.endpoint.clone()?;
        Some(Self::new(endpoint, config.api_key.clone(), config.table.clone()))
    }

    /// Full URL of the insert endpoint.
    pub fn insert_url(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.endpoint.trim_end_matches('/'),
            self.table
        )
    }

    fn auth_request(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(api_key) = &self.api_key {
            request
                .header("apikey", api_key)
                .header("Authorization", format!("Bearer {}", api_key))
        } else {
            request
        }
    }
}

#[async_trait]
impl ConversationLog for RestConversationLog {
    async fn append(&self, record: &ConversationRecord) -> Result<()> {
        let request = self
            .client
            .post(self.insert_url())
            .timeout(REQUEST_TIMEOUT)
            .header("Prefer", "return=minimal")
            .json(&[record]);

        let response = self
            .auth_request(request)
            .send()
            .await
            .map_err(|e| NagarError::remote(format!("conversation log request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NagarError::remote(format!(
                "conversation log returned {}: {}",
                status, body
            )));
        }

        tracing::debug!(user_id = %record.user_id, "[RestConversationLog] Record stored");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_url() {
        let log = RestConversationLog::new("https://db.example.in/", None, "contact_submissions");
        assert_eq!(
            log.insert_url(),
            "https://db.example.in/rest/v1/contact_submissions"
        );
    }

    #[test]
    fn test_disabled_without_endpoint() {
        assert!(RestConversationLog::from_config(&LogConfig::default()).is_none());

        let config = LogConfig {
            endpoint: Some("https://db.example.in".into()),
            ..LogConfig::default()
        };
        let log = RestConversationLog::from_config(&config).unwrap();
        assert!(log.insert_url().ends_with("/rest/v1/contact_submissions"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_remote_error() {
        let log = RestConversationLog::new("http://127.0.0.1:9", None, "t");
        let record = ConversationRecord {
            user_id: "u".into(),
            name: "User".into(),
            email: "user@example.com".into(),
            subject: "Chatbot Conversation".into(),
            message: "User: hi\nBot: hello".into(),
        };
        let err = log.append(&record).await.unwrap_err();
        assert!(err.is_remote());
    }
}
