use std::sync::Arc;

use nagar_core::chat::{
    ChatEvent, ChatLanguage, ConversationState, ImageAttachment, MessageKind, MessageStatus,
    Notice, Sender,
};
use nagar_core::config::ChatConfig;
use nagar_core::conversation_log::ConversationRecord;
use nagar_core::error::Result;
use nagar_core::lexicon::responses::{self, KeywordReply};
use nagar_core::lexicon::tracking_id::IMAGE_REPORT_PREFIX;
use nagar_core::lexicon::{Route, TrackingId, route};
use nagar_core::waste::compose_analysis_reply;
use nagar_execution::{TurnHandle, TurnScheduler};
use tokio::sync::{RwLock, mpsc};

use crate::context::ChatContext;

/// Result of [`ConversationDriver::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty input and no image; nothing changed.
    Ignored,
    /// An image analysis is still pending, so another one was refused.
    Busy,
    /// The turn was accepted and its replies scheduled.
    Dispatched {
        turn_id: u64,
        /// Name of the route that claimed the turn.
        route: &'static str,
    },
}

/// State and collaborators shared between the driver and its turn tasks.
struct Shared {
    session_id: String,
    context: ChatContext,
    state: RwLock<ConversationState>,
    events: mpsc::UnboundedSender<ChatEvent>,
}

/// Drives one chat session.
///
/// Each submitted turn is routed once and its bot replies are scheduled as
/// tasks of that turn. Every state change is published on the event channel
/// while the state lock is held, so events arrive in the order they were
/// applied. Dropping the driver cancels all outstanding replies.
pub struct ConversationDriver {
    shared: Arc<Shared>,
    scheduler: TurnScheduler,
}

impl ConversationDriver {
    /// Creates a session holding only the greeting, and the receiving end of
    /// its event stream.
    pub fn new(context: ChatContext) -> (Self, mpsc::UnboundedReceiver<ChatEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let state = ConversationState::new(context.config.default_language);
        let session_id = uuid::Uuid::new_v4().to_string();
        tracing::debug!(%session_id, "Conversation started");

        let driver = Self {
            shared: Arc::new(Shared {
                session_id,
                context,
                state: RwLock::new(state),
                events,
            }),
            scheduler: TurnScheduler::new(),
        };
        (driver, receiver)
    }

    pub fn session_id(&self) -> &str {
        &self.shared.session_id
    }

    pub fn config(&self) -> &ChatConfig {
        &self.shared.context.config
    }

    /// A copy of the current state.
    pub async fn snapshot(&self) -> ConversationState {
        self.shared.state.read().await.clone()
    }

    pub async fn language(&self) -> ChatLanguage {
        self.shared.state.read().await.current_language
    }

    pub async fn set_input(&self, text: impl Into<String>) {
        self.shared.state.write().await.pending_input = text.into();
    }

    /// Publishes a notice that does not belong to any turn.
    pub fn notify(&self, notice: Notice) {
        self.shared.emit(ChatEvent::Notice { notice });
    }

    /// Attaches an already encoded image.
    ///
    /// The image is checked against the configured size limit. A rejected
    /// image leaves the state untouched and only produces a notice.
    pub async fn attach_image(&self, image: ImageAttachment) -> Result<()> {
        let max_bytes = self.shared.context.config.max_attachment_bytes;
        if let Err(err) = ImageAttachment::validate(&image.mime_type, image.size, max_bytes) {
            self.notify(err.to_notice());
            return Err(err);
        }

        let mut state = self.shared.state.write().await;
        tracing::debug!(
            session_id = %self.shared.session_id,
            mime_type = %image.mime_type,
            size = image.size,
            "Image attached"
        );
        state.attached_image = Some(image);
        self.shared.emit(ChatEvent::AttachmentChanged { attached: true });
        self.shared.emit(ChatEvent::Notice {
            notice: responses::image_attached_notice(),
        });
        Ok(())
    }

    /// Validates and encodes raw image bytes, then attaches them.
    pub async fn attach_bytes(
        &self,
        file_name: Option<String>,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> Result<()> {
        let max_bytes = self.shared.context.config.max_attachment_bytes;
        match ImageAttachment::from_bytes(file_name, mime_type, bytes, max_bytes) {
            Ok(image) => self.attach_image(image).await,
            Err(err) => {
                self.notify(err.to_notice());
                Err(err)
            }
        }
    }

    pub async fn clear_attachment(&self) {
        let mut state = self.shared.state.write().await;
        self.shared.clear_attachment(&mut state);
    }

    /// Sets the input and submits it.
    pub async fn submit_text(&self, text: impl Into<String>) -> SubmitOutcome {
        self.set_input(text).await;
        self.submit().await
    }

    /// Submits the pending input together with any attached image.
    pub async fn submit(&self) -> SubmitOutcome {
        let shared = &self.shared;
        let mut state = shared.state.write().await;

        let text = state.pending_input.trim().to_string();
        let image = state.attached_image.clone();
        if text.is_empty() && image.is_none() {
            return SubmitOutcome::Ignored;
        }

        let language = state.current_language;
        let route = route(&text, language, image.is_some());
        if route == Route::AnalyzeWaste && state.has_pending() {
            shared.emit(ChatEvent::Notice {
                notice: responses::analysis_busy_notice(language),
            });
            return SubmitOutcome::Busy;
        }

        let kind = match &image {
            Some(image) => MessageKind::Attachment {
                image: image.clone(),
            },
            None => MessageKind::Plain,
        };
        let message = state.append(Sender::User, text.clone(), None, kind);
        shared.emit(ChatEvent::MessageAppended { message });
        state.pending_input.clear();
        if !state.is_awaiting_response {
            state.is_awaiting_response = true;
            shared.emit(ChatEvent::TypingChanged { typing: true });
        }

        let config = &shared.context.config;
        let turn = self.scheduler.begin_turn(config.cancel_superseded_followups);
        tracing::info!(
            session_id = %shared.session_id,
            turn_id = turn.id(),
            route = route.name(),
            %language,
            "Turn dispatched"
        );
        let outcome = SubmitOutcome::Dispatched {
            turn_id: turn.id(),
            route: route.name(),
        };

        match (route, image) {
            (Route::SwitchLanguage(target), _) => {
                // The attachment is dropped right away, the welcome follows later.
                shared.clear_attachment(&mut state);
                turn.spawn_after(
                    config.language_switch_delay(),
                    shared.clone().switch_language(turn.clone(), text, target),
                );
            }
            (Route::AnalyzeWaste, Some(image)) => {
                let placeholder = state.append(
                    Sender::Bot,
                    responses::analysis_pending(language),
                    Some(MessageStatus::Pending),
                    MessageKind::Plain,
                );
                let placeholder_id = placeholder.id;
                shared.emit(ChatEvent::MessageAppended {
                    message: placeholder,
                });
                turn.spawn(shared.clone().analyze(
                    turn.clone(),
                    text,
                    image,
                    placeholder_id,
                    language,
                ));
            }
            (Route::ImageReport(keyword), _) => {
                turn.spawn_after(
                    config.response_delay(),
                    shared.clone().report_image(turn.clone(), text, keyword, language),
                );
            }
            (Route::Keyword(reply), _) => {
                turn.spawn_after(
                    config.response_delay(),
                    shared.clone().answer_keyword(turn.clone(), text, reply, language),
                );
            }
            (Route::Fallback, _) | (Route::AnalyzeWaste, None) => {
                turn.spawn_after(
                    config.response_delay(),
                    shared.clone().answer_fallback(turn.clone(), text, language),
                );
            }
        }

        outcome
    }

    /// Header toggle: flips the language immediately.
    pub async fn switch_language(&self) -> ChatLanguage {
        let mut state = self.shared.state.write().await;
        let target = state.current_language.toggled();
        state.current_language = target;
        self.shared.emit(ChatEvent::LanguageChanged { language: target });

        let message = state.append(
            Sender::Bot,
            responses::welcome(target),
            Some(MessageStatus::Success),
            MessageKind::Plain,
        );
        self.shared.emit(ChatEvent::MessageAppended { message });
        self.shared.emit(ChatEvent::Notice {
            notice: responses::language_changed_notice(target),
        });
        tracing::info!(session_id = %self.shared.session_id, language = %target, "Language toggled");
        target
    }

    /// Cancels every outstanding reply and resets the history to the greeting.
    ///
    /// Language and earned eco-points are kept.
    pub async fn clear(&self) {
        self.scheduler.cancel_all();

        let mut state = self.shared.state.write().await;
        let was_typing = state.is_awaiting_response;
        let had_attachment = state.attached_image.is_some();
        let eco_points = state.eco_points;
        let language = state.current_language;

        *state = ConversationState::new(language);
        state.eco_points = eco_points;

        self.shared.emit(ChatEvent::Cleared);
        for message in &state.messages {
            self.shared.emit(ChatEvent::MessageAppended {
                message: message.clone(),
            });
        }
        if was_typing {
            self.shared.emit(ChatEvent::TypingChanged { typing: false });
        }
        if had_attachment {
            self.shared
                .emit(ChatEvent::AttachmentChanged { attached: false });
        }
        tracing::info!(session_id = %self.shared.session_id, "Conversation cleared");
    }

    /// Cancels everything for good. Later submits are recorded but never
    /// answered.
    pub fn shutdown(&self) {
        self.scheduler.shutdown();
    }

    /// Waits until every scheduled reply of every turn has been delivered
    /// or cancelled.
    pub async fn wait_idle(&self) {
        self.scheduler.wait_idle().await;
    }

    /// Number of reply tasks still running.
    pub fn in_flight(&self) -> usize {
        self.scheduler.in_flight()
    }
}

impl Shared {
    fn emit(&self, event: ChatEvent) {
        if self.events.send(event).is_err() {
            tracing::trace!(session_id = %self.session_id, "Event receiver dropped");
        }
    }

    fn append_reply(&self, state: &mut ConversationState, text: impl Into<String>) {
        let message = state.append(
            Sender::Bot,
            text,
            Some(MessageStatus::Success),
            MessageKind::Plain,
        );
        self.emit(ChatEvent::MessageAppended { message });
    }

    fn finish_typing(&self, state: &mut ConversationState) {
        if state.is_awaiting_response {
            state.is_awaiting_response = false;
            self.emit(ChatEvent::TypingChanged { typing: false });
        }
    }

    fn clear_attachment(&self, state: &mut ConversationState) {
        if state.take_attachment().is_some() {
            self.emit(ChatEvent::AttachmentChanged { attached: false });
        }
    }

    /// Clears the attachment unless the user has swapped in another image
    /// since `image` was submitted.
    fn clear_analysed_attachment(&self, state: &mut ConversationState, image: &ImageAttachment) {
        if state.attached_image.as_ref() == Some(image) {
            self.clear_attachment(state);
        }
    }

    /// Stores the exchange for signed-in users. Failures are logged only.
    fn persist(&self, turn: &TurnHandle, user_text: &str, bot_text: &str) {
        let Some(identity) = self.context.auth.identity() else {
            return;
        };
        let record = ConversationRecord::from_exchange(&identity, user_text, bot_text);
        let log = self.context.conversation_log.clone();
        let session_id = self.session_id.clone();
        turn.spawn_detached(async move {
            match log.append(&record).await {
                Ok(()) => tracing::debug!(%session_id, "Conversation saved"),
                Err(err) => tracing::error!(
                    %session_id,
                    user_id = %record.user_id,
                    error = %err,
                    "Failed to save conversation"
                ),
            }
        });
    }

    async fn switch_language(
        self: Arc<Self>,
        turn: TurnHandle,
        user_text: String,
        target: ChatLanguage,
    ) {
        let reply = responses::welcome(target);
        let mut state = self.state.write().await;
        state.current_language = target;
        self.emit(ChatEvent::LanguageChanged { language: target });
        self.append_reply(&mut state, reply);
        self.finish_typing(&mut state);
        drop(state);
        self.persist(&turn, &user_text, reply);
    }

    async fn analyze(
        self: Arc<Self>,
        turn: TurnHandle,
        user_text: String,
        image: ImageAttachment,
        placeholder_id: u64,
        language: ChatLanguage,
    ) {
        let result = self.context.classifier.classify(&image.payload).await;

        let mut state = self.state.write().await;
        let analysis = match result {
            Ok(analysis) => analysis,
            Err(err) => {
                tracing::warn!(
                    session_id = %self.session_id,
                    error = %err,
                    "Waste classification failed"
                );
                if let Some(message) = state.replace_pending(
                    placeholder_id,
                    responses::analysis_failed(language),
                    Some(MessageStatus::Error),
                    MessageKind::Plain,
                ) {
                    self.emit(ChatEvent::MessageReplaced {
                        removed_id: placeholder_id,
                        message,
                    });
                }
                self.clear_analysed_attachment(&mut state, &image);
                self.finish_typing(&mut state);
                return;
            }
        };

        let reply = compose_analysis_reply(&analysis, language);
        tracing::info!(
            session_id = %self.session_id,
            category = %analysis.category,
            confidence = analysis.confidence,
            "Waste identified"
        );
        let Some(message) = state.replace_pending(
            placeholder_id,
            reply.clone(),
            Some(MessageStatus::Success),
            MessageKind::Analysis { analysis },
        ) else {
            tracing::debug!(placeholder_id, "Placeholder gone, dropping analysis");
            return;
        };
        self.emit(ChatEvent::MessageReplaced {
            removed_id: placeholder_id,
            message,
        });
        self.clear_analysed_attachment(&mut state, &image);
        self.finish_typing(&mut state);
        drop(state);
        self.persist(&turn, &user_text, &reply);

        let delay = self.context.config.gamification_delay();
        turn.spawn_followup_after(delay, self.award_eco_points(language));
    }

    async fn award_eco_points(self: Arc<Self>, language: ChatLanguage) {
        let points = self.context.config.eco_points_per_identification;
        let mut state = self.state.write().await;
        self.append_reply(&mut state, responses::gamification(language, points));
        state.eco_points = state.eco_points.saturating_add(points);
        self.emit(ChatEvent::EcoPointsEarned {
            points,
            total: state.eco_points,
        });
        self.emit(ChatEvent::Notice {
            notice: responses::eco_points_notice(language, points),
        });
    }

    async fn report_image(
        self: Arc<Self>,
        turn: TurnHandle,
        user_text: String,
        keyword: Option<&'static KeywordReply>,
        language: ChatLanguage,
    ) {
        let tracking_id = TrackingId::generate(IMAGE_REPORT_PREFIX);
        let reply = responses::image_report(language, tracking_id.as_str());

        let mut state = self.state.write().await;
        self.append_reply(&mut state, reply.as_str());
        self.clear_attachment(&mut state);
        self.emit(ChatEvent::Notice {
            notice: responses::image_logged_notice(language),
        });
        self.finish_typing(&mut state);
        drop(state);

        tracing::info!(session_id = %self.session_id, %tracking_id, "Image complaint logged");
        self.persist(&turn, &user_text, &reply);

        if let Some(keyword) = keyword.filter(|k| k.files_complaint()) {
            self.schedule_status_update(&turn, keyword.topic, language);
        }
    }

    async fn answer_keyword(
        self: Arc<Self>,
        turn: TurnHandle,
        user_text: String,
        keyword: &'static KeywordReply,
        language: ChatLanguage,
    ) {
        let mut reply = keyword.reply(language).to_string();
        if let Some(prefix) = keyword.complaint_prefix {
            let tracking_id = TrackingId::generate(prefix);
            tracing::info!(
                session_id = %self.session_id,
                topic = keyword.topic,
                %tracking_id,
                "Complaint registered"
            );
            reply.push('#');
            reply.push_str(tracking_id.as_str());
        }

        let mut state = self.state.write().await;
        self.append_reply(&mut state, reply.as_str());
        self.finish_typing(&mut state);
        drop(state);
        self.persist(&turn, &user_text, &reply);

        if keyword.files_complaint() {
            self.schedule_status_update(&turn, keyword.topic, language);
        }
    }

    fn schedule_status_update(self: Arc<Self>, turn: &TurnHandle, topic: &'static str, language: ChatLanguage) {
        let delay = self.context.config.status_update_delay();
        turn.spawn_followup_after(delay, async move {
            let mut state = self.state.write().await;
            self.append_reply(&mut state, responses::status_update(language, topic));
        });
    }

    async fn answer_fallback(self: Arc<Self>, turn: TurnHandle, user_text: String, language: ChatLanguage) {
        let reply = responses::fallback(language);
        let mut state = self.state.write().await;
        self.append_reply(&mut state, reply);
        self.finish_typing(&mut state);
        drop(state);
        self.persist(&turn, &user_text, reply);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nagar_core::chat::Message;

    fn driver() -> (ConversationDriver, mpsc::UnboundedReceiver<ChatEvent>) {
        ConversationDriver::new(ChatContext::new(ChatConfig::default()))
    }

    fn bot_texts(messages: &[Message]) -> Vec<&str> {
        messages
            .iter()
            .filter(|m| m.is_from_bot())
            .map(|m| m.text.as_str())
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_starts_with_greeting() {
        let (driver, _events) = driver();
        let state = driver.snapshot().await;
        assert_eq!(state.messages.len(), 1);
        assert!(state.messages[0].text.starts_with("Hello! I'm Nagarsathi"));
        assert!(!state.is_awaiting_response);
    }

    #[tokio::test(start_paused = true)]
    async fn test_whitespace_input_is_ignored() {
        let (driver, mut events) = driver();
        assert_eq!(driver.submit_text("   ").await, SubmitOutcome::Ignored);
        assert_eq!(driver.snapshot().await.messages.len(), 1);
        assert!(events.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_indicator_precedes_reply() {
        let (driver, mut events) = driver();
        driver.submit_text("hello").await;

        assert!(matches!(
            events.try_recv().unwrap(),
            ChatEvent::MessageAppended { .. }
        ));
        assert_eq!(
            events.try_recv().unwrap(),
            ChatEvent::TypingChanged { typing: true }
        );
        assert!(driver.snapshot().await.is_awaiting_response);

        driver.wait_idle().await;
        let state = driver.snapshot().await;
        assert!(!state.is_awaiting_response);
        assert_eq!(
            bot_texts(&state.messages).last().copied(),
            Some(responses::GENERAL_REPLIES[0].english)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_toggle_is_immediate() {
        let (driver, _events) = driver();
        assert_eq!(driver.switch_language().await, ChatLanguage::Hindi);
        let state = driver.snapshot().await;
        assert_eq!(state.current_language, ChatLanguage::Hindi);
        assert_eq!(
            state.last_message().unwrap().text,
            responses::welcome(ChatLanguage::Hindi)
        );
        assert_eq!(driver.in_flight(), 0);
    }
}
