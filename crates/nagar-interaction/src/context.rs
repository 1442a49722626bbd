use std::sync::Arc;
use std::time::Duration;

use nagar_core::auth::{AnonymousAuth, AuthContext};
use nagar_core::config::ChatConfig;
use nagar_core::conversation_log::{ConversationLog, NoopConversationLog};
use nagar_core::waste::WasteClassifier;

use crate::simulated_classifier::SimulatedClassifier;

/// Collaborators handed to a [`crate::ConversationDriver`] at construction.
#[derive(Clone)]
pub struct ChatContext {
    pub config: ChatConfig,
    pub auth: Arc<dyn AuthContext>,
    pub conversation_log: Arc<dyn ConversationLog>,
    pub classifier: Arc<dyn WasteClassifier>,
}

impl ChatContext {
    /// Anonymous session, no persistence, simulated classifier using the
    /// configured classification delay.
    pub fn new(config: ChatConfig) -> Self {
        let latency = Duration::from_millis(config.classification_delay_ms);
        Self {
            config,
            auth: Arc::new(AnonymousAuth),
            conversation_log: Arc::new(NoopConversationLog),
            classifier: Arc::new(SimulatedClassifier::new(latency)),
        }
    }

    pub fn with_auth(mut self, auth: Arc<dyn AuthContext>) -> Self {
        self.auth = auth;
        self
    }

    pub fn with_conversation_log(mut self, log: Arc<dyn ConversationLog>) -> Self {
        self.conversation_log = log;
        self
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn WasteClassifier>) -> Self {
        self.classifier = classifier;
        self
    }
}

impl Default for ChatContext {
    fn default() -> Self {
        Self::new(ChatConfig::default())
    }
}
